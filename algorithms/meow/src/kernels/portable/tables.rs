//! Inverse-cipher lookup tables for the table-driven round.
//!
//! Entry `x` of `TD0` is the inverse `MixColumns` column produced by the
//! byte `InvSubBytes(x)` sitting in row 0, packed little-endian; `TD1`..`TD3`
//! are the same column rotated one byte per table.

#[rustfmt::skip]
pub static TD0: [u32; 256] = [
    0x50a7_f451, 0x5365_417e, 0xc3a4_171a, 0x965e_273a, 0xcb6b_ab3b, 0xf145_9d1f, 0xab58_faac, 0x9303_e34b,
    0x55fa_3020, 0xf66d_76ad, 0x9176_cc88, 0x254c_02f5, 0xfcd7_e54f, 0xd7cb_2ac5, 0x8044_3526, 0x8fa3_62b5,
    0x495a_b1de, 0x671b_ba25, 0x980e_ea45, 0xe1c0_fe5d, 0x0275_2fc3, 0x12f0_4c81, 0xa397_468d, 0xc6f9_d36b,
    0xe75f_8f03, 0x959c_9215, 0xeb7a_6dbf, 0xda59_5295, 0x2d83_bed4, 0xd321_7458, 0x2969_e049, 0x44c8_c98e,
    0x6a89_c275, 0x7879_8ef4, 0x6b3e_5899, 0xdd71_b927, 0xb64f_e1be, 0x17ad_88f0, 0x66ac_20c9, 0xb43a_ce7d,
    0x184a_df63, 0x8231_1ae5, 0x6033_5197, 0x457f_5362, 0xe077_64b1, 0x84ae_6bbb, 0x1ca0_81fe, 0x942b_08f9,
    0x5868_4870, 0x19fd_458f, 0x876c_de94, 0xb7f8_7b52, 0x23d3_73ab, 0xe202_4b72, 0x578f_1fe3, 0x2aab_5566,
    0x0728_ebb2, 0x03c2_b52f, 0x9a7b_c586, 0xa508_37d3, 0xf287_2830, 0xb2a5_bf23, 0xba6a_0302, 0x5c82_16ed,
    0x2b1c_cf8a, 0x92b4_79a7, 0xf0f2_07f3, 0xa1e2_694e, 0xcdf4_da65, 0xd5be_0506, 0x1f62_34d1, 0x8afe_a6c4,
    0x9d53_2e34, 0xa055_f3a2, 0x32e1_8a05, 0x75eb_f6a4, 0x39ec_830b, 0xaaef_6040, 0x069f_715e, 0x5110_6ebd,
    0xf98a_213e, 0x3d06_dd96, 0xae05_3edd, 0x46bd_e64d, 0xb58d_5491, 0x055d_c471, 0x6fd4_0604, 0xff15_5060,
    0x24fb_9819, 0x97e9_bdd6, 0xcc43_4089, 0x779e_d967, 0xbd42_e8b0, 0x888b_8907, 0x385b_19e7, 0xdbee_c879,
    0x470a_7ca1, 0xe90f_427c, 0xc91e_84f8, 0x0000_0000, 0x8386_8009, 0x48ed_2b32, 0xac70_111e, 0x4e72_5a6c,
    0xfbff_0efd, 0x5638_850f, 0x1ed5_ae3d, 0x2739_2d36, 0x64d9_0f0a, 0x21a6_5c68, 0xd154_5b9b, 0x3a2e_3624,
    0xb167_0a0c, 0x0fe7_5793, 0xd296_eeb4, 0x9e91_9b1b, 0x4fc5_c080, 0xa220_dc61, 0x694b_775a, 0x161a_121c,
    0x0aba_93e2, 0xe52a_a0c0, 0x43e0_223c, 0x1d17_1b12, 0x0b0d_090e, 0xadc7_8bf2, 0xb9a8_b62d, 0xc8a9_1e14,
    0x8519_f157, 0x4c07_75af, 0xbbdd_99ee, 0xfd60_7fa3, 0x9f26_01f7, 0xbcf5_725c, 0xc53b_6644, 0x347e_fb5b,
    0x7629_438b, 0xdcc6_23cb, 0x68fc_edb6, 0x63f1_e4b8, 0xcadc_31d7, 0x1085_6342, 0x4022_9713, 0x2011_c684,
    0x7d24_4a85, 0xf83d_bbd2, 0x1132_f9ae, 0x6da1_29c7, 0x4b2f_9e1d, 0xf330_b2dc, 0xec52_860d, 0xd0e3_c177,
    0x6c16_b32b, 0x99b9_70a9, 0xfa48_9411, 0x2264_e947, 0xc48c_fca8, 0x1a3f_f0a0, 0xd82c_7d56, 0xef90_3322,
    0xc74e_4987, 0xc1d1_38d9, 0xfea2_ca8c, 0x360b_d498, 0xcf81_f5a6, 0x28de_7aa5, 0x268e_b7da, 0xa4bf_ad3f,
    0xe49d_3a2c, 0x0d92_7850, 0x9bcc_5f6a, 0x6246_7e54, 0xc213_8df6, 0xe8b8_d890, 0x5ef7_392e, 0xf5af_c382,
    0xbe80_5d9f, 0x7c93_d069, 0xa92d_d56f, 0xb312_25cf, 0x3b99_acc8, 0xa77d_1810, 0x6e63_9ce8, 0x7bbb_3bdb,
    0x0978_26cd, 0xf418_596e, 0x01b7_9aec, 0xa89a_4f83, 0x656e_95e6, 0x7ee6_ffaa, 0x08cf_bc21, 0xe6e8_15ef,
    0xd99b_e7ba, 0xce36_6f4a, 0xd409_9fea, 0xd67c_b029, 0xafb2_a431, 0x3123_3f2a, 0x3094_a5c6, 0xc066_a235,
    0x37bc_4e74, 0xa6ca_82fc, 0xb0d0_90e0, 0x15d8_a733, 0x4a98_04f1, 0xf7da_ec41, 0x0e50_cd7f, 0x2ff6_9117,
    0x8dd6_4d76, 0x4db0_ef43, 0x544d_aacc, 0xdf04_96e4, 0xe3b5_d19e, 0x1b88_6a4c, 0xb81f_2cc1, 0x7f51_6546,
    0x04ea_5e9d, 0x5d35_8c01, 0x7374_87fa, 0x2e41_0bfb, 0x5a1d_67b3, 0x52d2_db92, 0x3356_10e9, 0x1347_d66d,
    0x8c61_d79a, 0x7a0c_a137, 0x8e14_f859, 0x893c_13eb, 0xee27_a9ce, 0x35c9_61b7, 0xede5_1ce1, 0x3cb1_477a,
    0x59df_d29c, 0x3f73_f255, 0x79ce_1418, 0xbf37_c773, 0xeacd_f753, 0x5baa_fd5f, 0x146f_3ddf, 0x86db_4478,
    0x81f3_afca, 0x3ec4_68b9, 0x2c34_2438, 0x5f40_a3c2, 0x72c3_1d16, 0x0c25_e2bc, 0x8b49_3c28, 0x4195_0dff,
    0x7101_a839, 0xdeb3_0c08, 0x9ce4_b4d8, 0x90c1_5664, 0x6184_cb7b, 0x70b6_32d5, 0x745c_6c48, 0x4257_b8d0,
];

#[rustfmt::skip]
pub static TD1: [u32; 256] = [
    0x5150_a7f4, 0x7e53_6541, 0x1ac3_a417, 0x3a96_5e27, 0x3bcb_6bab, 0x1ff1_459d, 0xacab_58fa, 0x4b93_03e3,
    0x2055_fa30, 0xadf6_6d76, 0x8891_76cc, 0xf525_4c02, 0x4ffc_d7e5, 0xc5d7_cb2a, 0x2680_4435, 0xb58f_a362,
    0xde49_5ab1, 0x2567_1bba, 0x4598_0eea, 0x5de1_c0fe, 0xc302_752f, 0x8112_f04c, 0x8da3_9746, 0x6bc6_f9d3,
    0x03e7_5f8f, 0x1595_9c92, 0xbfeb_7a6d, 0x95da_5952, 0xd42d_83be, 0x58d3_2174, 0x4929_69e0, 0x8e44_c8c9,
    0x756a_89c2, 0xf478_798e, 0x996b_3e58, 0x27dd_71b9, 0xbeb6_4fe1, 0xf017_ad88, 0xc966_ac20, 0x7db4_3ace,
    0x6318_4adf, 0xe582_311a, 0x9760_3351, 0x6245_7f53, 0xb1e0_7764, 0xbb84_ae6b, 0xfe1c_a081, 0xf994_2b08,
    0x7058_6848, 0x8f19_fd45, 0x9487_6cde, 0x52b7_f87b, 0xab23_d373, 0x72e2_024b, 0xe357_8f1f, 0x662a_ab55,
    0xb207_28eb, 0x2f03_c2b5, 0x869a_7bc5, 0xd3a5_0837, 0x30f2_8728, 0x23b2_a5bf, 0x02ba_6a03, 0xed5c_8216,
    0x8a2b_1ccf, 0xa792_b479, 0xf3f0_f207, 0x4ea1_e269, 0x65cd_f4da, 0x06d5_be05, 0xd11f_6234, 0xc48a_fea6,
    0x349d_532e, 0xa2a0_55f3, 0x0532_e18a, 0xa475_ebf6, 0x0b39_ec83, 0x40aa_ef60, 0x5e06_9f71, 0xbd51_106e,
    0x3ef9_8a21, 0x963d_06dd, 0xddae_053e, 0x4d46_bde6, 0x91b5_8d54, 0x7105_5dc4, 0x046f_d406, 0x60ff_1550,
    0x1924_fb98, 0xd697_e9bd, 0x89cc_4340, 0x6777_9ed9, 0xb0bd_42e8, 0x0788_8b89, 0xe738_5b19, 0x79db_eec8,
    0xa147_0a7c, 0x7ce9_0f42, 0xf8c9_1e84, 0x0000_0000, 0x0983_8680, 0x3248_ed2b, 0x1eac_7011, 0x6c4e_725a,
    0xfdfb_ff0e, 0x0f56_3885, 0x3d1e_d5ae, 0x3627_392d, 0x0a64_d90f, 0x6821_a65c, 0x9bd1_545b, 0x243a_2e36,
    0x0cb1_670a, 0x930f_e757, 0xb4d2_96ee, 0x1b9e_919b, 0x804f_c5c0, 0x61a2_20dc, 0x5a69_4b77, 0x1c16_1a12,
    0xe20a_ba93, 0xc0e5_2aa0, 0x3c43_e022, 0x121d_171b, 0x0e0b_0d09, 0xf2ad_c78b, 0x2db9_a8b6, 0x14c8_a91e,
    0x5785_19f1, 0xaf4c_0775, 0xeebb_dd99, 0xa3fd_607f, 0xf79f_2601, 0x5cbc_f572, 0x44c5_3b66, 0x5b34_7efb,
    0x8b76_2943, 0xcbdc_c623, 0xb668_fced, 0xb863_f1e4, 0xd7ca_dc31, 0x4210_8563, 0x1340_2297, 0x8420_11c6,
    0x857d_244a, 0xd2f8_3dbb, 0xae11_32f9, 0xc76d_a129, 0x1d4b_2f9e, 0xdcf3_30b2, 0x0dec_5286, 0x77d0_e3c1,
    0x2b6c_16b3, 0xa999_b970, 0x11fa_4894, 0x4722_64e9, 0xa8c4_8cfc, 0xa01a_3ff0, 0x56d8_2c7d, 0x22ef_9033,
    0x87c7_4e49, 0xd9c1_d138, 0x8cfe_a2ca, 0x9836_0bd4, 0xa6cf_81f5, 0xa528_de7a, 0xda26_8eb7, 0x3fa4_bfad,
    0x2ce4_9d3a, 0x500d_9278, 0x6a9b_cc5f, 0x5462_467e, 0xf6c2_138d, 0x90e8_b8d8, 0x2e5e_f739, 0x82f5_afc3,
    0x9fbe_805d, 0x697c_93d0, 0x6fa9_2dd5, 0xcfb3_1225, 0xc83b_99ac, 0x10a7_7d18, 0xe86e_639c, 0xdb7b_bb3b,
    0xcd09_7826, 0x6ef4_1859, 0xec01_b79a, 0x83a8_9a4f, 0xe665_6e95, 0xaa7e_e6ff, 0x2108_cfbc, 0xefe6_e815,
    0xbad9_9be7, 0x4ace_366f, 0xead4_099f, 0x29d6_7cb0, 0x31af_b2a4, 0x2a31_233f, 0xc630_94a5, 0x35c0_66a2,
    0x7437_bc4e, 0xfca6_ca82, 0xe0b0_d090, 0x3315_d8a7, 0xf14a_9804, 0x41f7_daec, 0x7f0e_50cd, 0x172f_f691,
    0x768d_d64d, 0x434d_b0ef, 0xcc54_4daa, 0xe4df_0496, 0x9ee3_b5d1, 0x4c1b_886a, 0xc1b8_1f2c, 0x467f_5165,
    0x9d04_ea5e, 0x015d_358c, 0xfa73_7487, 0xfb2e_410b, 0xb35a_1d67, 0x9252_d2db, 0xe933_5610, 0x6d13_47d6,
    0x9a8c_61d7, 0x377a_0ca1, 0x598e_14f8, 0xeb89_3c13, 0xceee_27a9, 0xb735_c961, 0xe1ed_e51c, 0x7a3c_b147,
    0x9c59_dfd2, 0x553f_73f2, 0x1879_ce14, 0x73bf_37c7, 0x53ea_cdf7, 0x5f5b_aafd, 0xdf14_6f3d, 0x7886_db44,
    0xca81_f3af, 0xb93e_c468, 0x382c_3424, 0xc25f_40a3, 0x1672_c31d, 0xbc0c_25e2, 0x288b_493c, 0xff41_950d,
    0x3971_01a8, 0x08de_b30c, 0xd89c_e4b4, 0x6490_c156, 0x7b61_84cb, 0xd570_b632, 0x4874_5c6c, 0xd042_57b8,
];

#[rustfmt::skip]
pub static TD2: [u32; 256] = [
    0xf451_50a7, 0x417e_5365, 0x171a_c3a4, 0x273a_965e, 0xab3b_cb6b, 0x9d1f_f145, 0xfaac_ab58, 0xe34b_9303,
    0x3020_55fa, 0x76ad_f66d, 0xcc88_9176, 0x02f5_254c, 0xe54f_fcd7, 0x2ac5_d7cb, 0x3526_8044, 0x62b5_8fa3,
    0xb1de_495a, 0xba25_671b, 0xea45_980e, 0xfe5d_e1c0, 0x2fc3_0275, 0x4c81_12f0, 0x468d_a397, 0xd36b_c6f9,
    0x8f03_e75f, 0x9215_959c, 0x6dbf_eb7a, 0x5295_da59, 0xbed4_2d83, 0x7458_d321, 0xe049_2969, 0xc98e_44c8,
    0xc275_6a89, 0x8ef4_7879, 0x5899_6b3e, 0xb927_dd71, 0xe1be_b64f, 0x88f0_17ad, 0x20c9_66ac, 0xce7d_b43a,
    0xdf63_184a, 0x1ae5_8231, 0x5197_6033, 0x5362_457f, 0x64b1_e077, 0x6bbb_84ae, 0x81fe_1ca0, 0x08f9_942b,
    0x4870_5868, 0x458f_19fd, 0xde94_876c, 0x7b52_b7f8, 0x73ab_23d3, 0x4b72_e202, 0x1fe3_578f, 0x5566_2aab,
    0xebb2_0728, 0xb52f_03c2, 0xc586_9a7b, 0x37d3_a508, 0x2830_f287, 0xbf23_b2a5, 0x0302_ba6a, 0x16ed_5c82,
    0xcf8a_2b1c, 0x79a7_92b4, 0x07f3_f0f2, 0x694e_a1e2, 0xda65_cdf4, 0x0506_d5be, 0x34d1_1f62, 0xa6c4_8afe,
    0x2e34_9d53, 0xf3a2_a055, 0x8a05_32e1, 0xf6a4_75eb, 0x830b_39ec, 0x6040_aaef, 0x715e_069f, 0x6ebd_5110,
    0x213e_f98a, 0xdd96_3d06, 0x3edd_ae05, 0xe64d_46bd, 0x5491_b58d, 0xc471_055d, 0x0604_6fd4, 0x5060_ff15,
    0x9819_24fb, 0xbdd6_97e9, 0x4089_cc43, 0xd967_779e, 0xe8b0_bd42, 0x8907_888b, 0x19e7_385b, 0xc879_dbee,
    0x7ca1_470a, 0x427c_e90f, 0x84f8_c91e, 0x0000_0000, 0x8009_8386, 0x2b32_48ed, 0x111e_ac70, 0x5a6c_4e72,
    0x0efd_fbff, 0x850f_5638, 0xae3d_1ed5, 0x2d36_2739, 0x0f0a_64d9, 0x5c68_21a6, 0x5b9b_d154, 0x3624_3a2e,
    0x0a0c_b167, 0x5793_0fe7, 0xeeb4_d296, 0x9b1b_9e91, 0xc080_4fc5, 0xdc61_a220, 0x775a_694b, 0x121c_161a,
    0x93e2_0aba, 0xa0c0_e52a, 0x223c_43e0, 0x1b12_1d17, 0x090e_0b0d, 0x8bf2_adc7, 0xb62d_b9a8, 0x1e14_c8a9,
    0xf157_8519, 0x75af_4c07, 0x99ee_bbdd, 0x7fa3_fd60, 0x01f7_9f26, 0x725c_bcf5, 0x6644_c53b, 0xfb5b_347e,
    0x438b_7629, 0x23cb_dcc6, 0xedb6_68fc, 0xe4b8_63f1, 0x31d7_cadc, 0x6342_1085, 0x9713_4022, 0xc684_2011,
    0x4a85_7d24, 0xbbd2_f83d, 0xf9ae_1132, 0x29c7_6da1, 0x9e1d_4b2f, 0xb2dc_f330, 0x860d_ec52, 0xc177_d0e3,
    0xb32b_6c16, 0x70a9_99b9, 0x9411_fa48, 0xe947_2264, 0xfca8_c48c, 0xf0a0_1a3f, 0x7d56_d82c, 0x3322_ef90,
    0x4987_c74e, 0x38d9_c1d1, 0xca8c_fea2, 0xd498_360b, 0xf5a6_cf81, 0x7aa5_28de, 0xb7da_268e, 0xad3f_a4bf,
    0x3a2c_e49d, 0x7850_0d92, 0x5f6a_9bcc, 0x7e54_6246, 0x8df6_c213, 0xd890_e8b8, 0x392e_5ef7, 0xc382_f5af,
    0x5d9f_be80, 0xd069_7c93, 0xd56f_a92d, 0x25cf_b312, 0xacc8_3b99, 0x1810_a77d, 0x9ce8_6e63, 0x3bdb_7bbb,
    0x26cd_0978, 0x596e_f418, 0x9aec_01b7, 0x4f83_a89a, 0x95e6_656e, 0xffaa_7ee6, 0xbc21_08cf, 0x15ef_e6e8,
    0xe7ba_d99b, 0x6f4a_ce36, 0x9fea_d409, 0xb029_d67c, 0xa431_afb2, 0x3f2a_3123, 0xa5c6_3094, 0xa235_c066,
    0x4e74_37bc, 0x82fc_a6ca, 0x90e0_b0d0, 0xa733_15d8, 0x04f1_4a98, 0xec41_f7da, 0xcd7f_0e50, 0x9117_2ff6,
    0x4d76_8dd6, 0xef43_4db0, 0xaacc_544d, 0x96e4_df04, 0xd19e_e3b5, 0x6a4c_1b88, 0x2cc1_b81f, 0x6546_7f51,
    0x5e9d_04ea, 0x8c01_5d35, 0x87fa_7374, 0x0bfb_2e41, 0x67b3_5a1d, 0xdb92_52d2, 0x10e9_3356, 0xd66d_1347,
    0xd79a_8c61, 0xa137_7a0c, 0xf859_8e14, 0x13eb_893c, 0xa9ce_ee27, 0x61b7_35c9, 0x1ce1_ede5, 0x477a_3cb1,
    0xd29c_59df, 0xf255_3f73, 0x1418_79ce, 0xc773_bf37, 0xf753_eacd, 0xfd5f_5baa, 0x3ddf_146f, 0x4478_86db,
    0xafca_81f3, 0x68b9_3ec4, 0x2438_2c34, 0xa3c2_5f40, 0x1d16_72c3, 0xe2bc_0c25, 0x3c28_8b49, 0x0dff_4195,
    0xa839_7101, 0x0c08_deb3, 0xb4d8_9ce4, 0x5664_90c1, 0xcb7b_6184, 0x32d5_70b6, 0x6c48_745c, 0xb8d0_4257,
];

#[rustfmt::skip]
pub static TD3: [u32; 256] = [
    0xa7f4_5150, 0x6541_7e53, 0xa417_1ac3, 0x5e27_3a96, 0x6bab_3bcb, 0x459d_1ff1, 0x58fa_acab, 0x03e3_4b93,
    0xfa30_2055, 0x6d76_adf6, 0x76cc_8891, 0x4c02_f525, 0xd7e5_4ffc, 0xcb2a_c5d7, 0x4435_2680, 0xa362_b58f,
    0x5ab1_de49, 0x1bba_2567, 0x0eea_4598, 0xc0fe_5de1, 0x752f_c302, 0xf04c_8112, 0x9746_8da3, 0xf9d3_6bc6,
    0x5f8f_03e7, 0x9c92_1595, 0x7a6d_bfeb, 0x5952_95da, 0x83be_d42d, 0x2174_58d3, 0x69e0_4929, 0xc8c9_8e44,
    0x89c2_756a, 0x798e_f478, 0x3e58_996b, 0x71b9_27dd, 0x4fe1_beb6, 0xad88_f017, 0xac20_c966, 0x3ace_7db4,
    0x4adf_6318, 0x311a_e582, 0x3351_9760, 0x7f53_6245, 0x7764_b1e0, 0xae6b_bb84, 0xa081_fe1c, 0x2b08_f994,
    0x6848_7058, 0xfd45_8f19, 0x6cde_9487, 0xf87b_52b7, 0xd373_ab23, 0x024b_72e2, 0x8f1f_e357, 0xab55_662a,
    0x28eb_b207, 0xc2b5_2f03, 0x7bc5_869a, 0x0837_d3a5, 0x8728_30f2, 0xa5bf_23b2, 0x6a03_02ba, 0x8216_ed5c,
    0x1ccf_8a2b, 0xb479_a792, 0xf207_f3f0, 0xe269_4ea1, 0xf4da_65cd, 0xbe05_06d5, 0x6234_d11f, 0xfea6_c48a,
    0x532e_349d, 0x55f3_a2a0, 0xe18a_0532, 0xebf6_a475, 0xec83_0b39, 0xef60_40aa, 0x9f71_5e06, 0x106e_bd51,
    0x8a21_3ef9, 0x06dd_963d, 0x053e_ddae, 0xbde6_4d46, 0x8d54_91b5, 0x5dc4_7105, 0xd406_046f, 0x1550_60ff,
    0xfb98_1924, 0xe9bd_d697, 0x4340_89cc, 0x9ed9_6777, 0x42e8_b0bd, 0x8b89_0788, 0x5b19_e738, 0xeec8_79db,
    0x0a7c_a147, 0x0f42_7ce9, 0x1e84_f8c9, 0x0000_0000, 0x8680_0983, 0xed2b_3248, 0x7011_1eac, 0x725a_6c4e,
    0xff0e_fdfb, 0x3885_0f56, 0xd5ae_3d1e, 0x392d_3627, 0xd90f_0a64, 0xa65c_6821, 0x545b_9bd1, 0x2e36_243a,
    0x670a_0cb1, 0xe757_930f, 0x96ee_b4d2, 0x919b_1b9e, 0xc5c0_804f, 0x20dc_61a2, 0x4b77_5a69, 0x1a12_1c16,
    0xba93_e20a, 0x2aa0_c0e5, 0xe022_3c43, 0x171b_121d, 0x0d09_0e0b, 0xc78b_f2ad, 0xa8b6_2db9, 0xa91e_14c8,
    0x19f1_5785, 0x0775_af4c, 0xdd99_eebb, 0x607f_a3fd, 0x2601_f79f, 0xf572_5cbc, 0x3b66_44c5, 0x7efb_5b34,
    0x2943_8b76, 0xc623_cbdc, 0xfced_b668, 0xf1e4_b863, 0xdc31_d7ca, 0x8563_4210, 0x2297_1340, 0x11c6_8420,
    0x244a_857d, 0x3dbb_d2f8, 0x32f9_ae11, 0xa129_c76d, 0x2f9e_1d4b, 0x30b2_dcf3, 0x5286_0dec, 0xe3c1_77d0,
    0x16b3_2b6c, 0xb970_a999, 0x4894_11fa, 0x64e9_4722, 0x8cfc_a8c4, 0x3ff0_a01a, 0x2c7d_56d8, 0x9033_22ef,
    0x4e49_87c7, 0xd138_d9c1, 0xa2ca_8cfe, 0x0bd4_9836, 0x81f5_a6cf, 0xde7a_a528, 0x8eb7_da26, 0xbfad_3fa4,
    0x9d3a_2ce4, 0x9278_500d, 0xcc5f_6a9b, 0x467e_5462, 0x138d_f6c2, 0xb8d8_90e8, 0xf739_2e5e, 0xafc3_82f5,
    0x805d_9fbe, 0x93d0_697c, 0x2dd5_6fa9, 0x1225_cfb3, 0x99ac_c83b, 0x7d18_10a7, 0x639c_e86e, 0xbb3b_db7b,
    0x7826_cd09, 0x1859_6ef4, 0xb79a_ec01, 0x9a4f_83a8, 0x6e95_e665, 0xe6ff_aa7e, 0xcfbc_2108, 0xe815_efe6,
    0x9be7_bad9, 0x366f_4ace, 0x099f_ead4, 0x7cb0_29d6, 0xb2a4_31af, 0x233f_2a31, 0x94a5_c630, 0x66a2_35c0,
    0xbc4e_7437, 0xca82_fca6, 0xd090_e0b0, 0xd8a7_3315, 0x9804_f14a, 0xdaec_41f7, 0x50cd_7f0e, 0xf691_172f,
    0xd64d_768d, 0xb0ef_434d, 0x4daa_cc54, 0x0496_e4df, 0xb5d1_9ee3, 0x886a_4c1b, 0x1f2c_c1b8, 0x5165_467f,
    0xea5e_9d04, 0x358c_015d, 0x7487_fa73, 0x410b_fb2e, 0x1d67_b35a, 0xd2db_9252, 0x5610_e933, 0x47d6_6d13,
    0x61d7_9a8c, 0x0ca1_377a, 0x14f8_598e, 0x3c13_eb89, 0x27a9_ceee, 0xc961_b735, 0xe51c_e1ed, 0xb147_7a3c,
    0xdfd2_9c59, 0x73f2_553f, 0xce14_1879, 0x37c7_73bf, 0xcdf7_53ea, 0xaafd_5f5b, 0x6f3d_df14, 0xdb44_7886,
    0xf3af_ca81, 0xc468_b93e, 0x3424_382c, 0x40a3_c25f, 0xc31d_1672, 0x25e2_bc0c, 0x493c_288b, 0x950d_ff41,
    0x01a8_3971, 0xb30c_08de, 0xe4b4_d89c, 0xc156_6490, 0x84cb_7b61, 0xb632_d570, 0x5c6c_4874, 0x57b8_d042,
];
