// This is a part of the codepages crate.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/
//
// Generated by tools/gen_iscii.py. Do not edit by hand.

//! ISCII-91 index tables for [codepages](../codepages/index.html).
//!
//! Scripts are numbered the way ISCII attribute bytes number them:
//! 2 is Devanagari, 3 Bengali, 4 Tamil, 5 Telugu, 6 Assamese, 7 Oriya,
//! 8 Kannada, 9 Malayalam, 10 Gujarati and 11 Punjabi.

/// The lowest script number.
pub const FIRST_SCRIPT: u8 = 2;

/// The highest script number.
pub const LAST_SCRIPT: u8 = 11;

/// Script number of characters shared by every script (the danda).
pub const NEUTRAL_SCRIPT: u8 = 0;

/// Set in a backward entry when the byte must be followed by a nukta.
pub const NUKTA_FLAG: u16 = 0x1000;

/// Set in a backward entry when the byte must be preceded by EXT.
pub const EXT_FLAG: u16 = 0x2000;

const BACKWARD_BASE: u32 = 0x0900;

/// Plain forms for bytes `0xA0..=0xFF`, one row per script.
static FORWARD: [[u16; 96]; 10] = [
    [
        0xffff, 0x0901, 0x0902, 0x0903, 0x0905, 0x0906, 0x0907, 0x0908,
        0x0909, 0x090a, 0x090b, 0x090e, 0x090f, 0x0910, 0x090d, 0x0912,
        0x0913, 0x0914, 0x0911, 0x0915, 0x0916, 0x0917, 0x0918, 0x0919,
        0x091a, 0x091b, 0x091c, 0x091d, 0x091e, 0x091f, 0x0920, 0x0921,
        0x0922, 0x0923, 0x0924, 0x0925, 0x0926, 0x0927, 0x0928, 0x0929,
        0x092a, 0x092b, 0x092c, 0x092d, 0x092e, 0x092f, 0x095f, 0x0930,
        0x0931, 0x0932, 0x0933, 0x0934, 0x0935, 0x0936, 0x0937, 0x0938,
        0x0939, 0xffff, 0x093e, 0x093f, 0x0940, 0x0941, 0x0942, 0x0943,
        0x0946, 0x0947, 0x0948, 0x0945, 0x094a, 0x094b, 0x094c, 0x0949,
        0x094d, 0x093c, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0966, 0x0967, 0x0968, 0x0969, 0x096a, 0x096b, 0x096c,
        0x096d, 0x096e, 0x096f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0981, 0x0982, 0x0983, 0x0985, 0x0986, 0x0987, 0x0988,
        0x0989, 0x098a, 0x098b, 0xffff, 0x098f, 0x0990, 0xffff, 0xffff,
        0x0993, 0x0994, 0xffff, 0x0995, 0x0996, 0x0997, 0x0998, 0x0999,
        0x099a, 0x099b, 0x099c, 0x099d, 0x099e, 0x099f, 0x09a0, 0x09a1,
        0x09a2, 0x09a3, 0x09a4, 0x09a5, 0x09a6, 0x09a7, 0x09a8, 0xffff,
        0x09aa, 0x09ab, 0x09ac, 0x09ad, 0x09ae, 0x09af, 0x09df, 0x09b0,
        0xffff, 0x09b2, 0xffff, 0xffff, 0xffff, 0x09b6, 0x09b7, 0x09b8,
        0x09b9, 0xffff, 0x09be, 0x09bf, 0x09c0, 0x09c1, 0x09c2, 0x09c3,
        0xffff, 0x09c7, 0x09c8, 0xffff, 0xffff, 0x09cb, 0x09cc, 0xffff,
        0x09cd, 0x09bc, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x09e6, 0x09e7, 0x09e8, 0x09e9, 0x09ea, 0x09eb, 0x09ec,
        0x09ed, 0x09ee, 0x09ef, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0x0b82, 0x0b83, 0x0b85, 0x0b86, 0x0b87, 0x0b88,
        0x0b89, 0x0b8a, 0xffff, 0x0b8e, 0x0b8f, 0x0b90, 0xffff, 0x0b92,
        0x0b93, 0x0b94, 0xffff, 0x0b95, 0xffff, 0xffff, 0xffff, 0x0b99,
        0x0b9a, 0xffff, 0x0b9c, 0xffff, 0x0b9e, 0x0b9f, 0xffff, 0xffff,
        0xffff, 0x0ba3, 0x0ba4, 0xffff, 0xffff, 0xffff, 0x0ba8, 0x0ba9,
        0x0baa, 0xffff, 0xffff, 0xffff, 0x0bae, 0x0baf, 0xffff, 0x0bb0,
        0x0bb1, 0x0bb2, 0x0bb3, 0x0bb4, 0x0bb5, 0x0bb6, 0x0bb7, 0x0bb8,
        0x0bb9, 0xffff, 0x0bbe, 0x0bbf, 0x0bc0, 0x0bc1, 0x0bc2, 0xffff,
        0x0bc6, 0x0bc7, 0x0bc8, 0xffff, 0x0bca, 0x0bcb, 0x0bcc, 0xffff,
        0x0bcd, 0xffff, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0be6, 0x0be7, 0x0be8, 0x0be9, 0x0bea, 0x0beb, 0x0bec,
        0x0bed, 0x0bee, 0x0bef, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0c01, 0x0c02, 0x0c03, 0x0c05, 0x0c06, 0x0c07, 0x0c08,
        0x0c09, 0x0c0a, 0x0c0b, 0x0c0e, 0x0c0f, 0x0c10, 0xffff, 0x0c12,
        0x0c13, 0x0c14, 0xffff, 0x0c15, 0x0c16, 0x0c17, 0x0c18, 0x0c19,
        0x0c1a, 0x0c1b, 0x0c1c, 0x0c1d, 0x0c1e, 0x0c1f, 0x0c20, 0x0c21,
        0x0c22, 0x0c23, 0x0c24, 0x0c25, 0x0c26, 0x0c27, 0x0c28, 0xffff,
        0x0c2a, 0x0c2b, 0x0c2c, 0x0c2d, 0x0c2e, 0x0c2f, 0xffff, 0x0c30,
        0x0c31, 0x0c32, 0x0c33, 0x0c34, 0x0c35, 0x0c36, 0x0c37, 0x0c38,
        0x0c39, 0xffff, 0x0c3e, 0x0c3f, 0x0c40, 0x0c41, 0x0c42, 0x0c43,
        0x0c46, 0x0c47, 0x0c48, 0xffff, 0x0c4a, 0x0c4b, 0x0c4c, 0xffff,
        0x0c4d, 0x0c3c, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0c66, 0x0c67, 0x0c68, 0x0c69, 0x0c6a, 0x0c6b, 0x0c6c,
        0x0c6d, 0x0c6e, 0x0c6f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0981, 0x0982, 0x0983, 0x0985, 0x0986, 0x0987, 0x0988,
        0x0989, 0x098a, 0x098b, 0xffff, 0x098f, 0x0990, 0xffff, 0xffff,
        0x0993, 0x0994, 0xffff, 0x0995, 0x0996, 0x0997, 0x0998, 0x0999,
        0x099a, 0x099b, 0x099c, 0x099d, 0x099e, 0x099f, 0x09a0, 0x09a1,
        0x09a2, 0x09a3, 0x09a4, 0x09a5, 0x09a6, 0x09a7, 0x09a8, 0xffff,
        0x09aa, 0x09ab, 0x09ac, 0x09ad, 0x09ae, 0x09af, 0x09df, 0x09f0,
        0xffff, 0x09b2, 0xffff, 0xffff, 0x09f1, 0x09b6, 0x09b7, 0x09b8,
        0x09b9, 0xffff, 0x09be, 0x09bf, 0x09c0, 0x09c1, 0x09c2, 0x09c3,
        0xffff, 0x09c7, 0x09c8, 0xffff, 0xffff, 0x09cb, 0x09cc, 0xffff,
        0x09cd, 0x09bc, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x09e6, 0x09e7, 0x09e8, 0x09e9, 0x09ea, 0x09eb, 0x09ec,
        0x09ed, 0x09ee, 0x09ef, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0b01, 0x0b02, 0x0b03, 0x0b05, 0x0b06, 0x0b07, 0x0b08,
        0x0b09, 0x0b0a, 0x0b0b, 0xffff, 0x0b0f, 0x0b10, 0xffff, 0xffff,
        0x0b13, 0x0b14, 0xffff, 0x0b15, 0x0b16, 0x0b17, 0x0b18, 0x0b19,
        0x0b1a, 0x0b1b, 0x0b1c, 0x0b1d, 0x0b1e, 0x0b1f, 0x0b20, 0x0b21,
        0x0b22, 0x0b23, 0x0b24, 0x0b25, 0x0b26, 0x0b27, 0x0b28, 0xffff,
        0x0b2a, 0x0b2b, 0x0b2c, 0x0b2d, 0x0b2e, 0x0b2f, 0x0b5f, 0x0b30,
        0xffff, 0x0b32, 0x0b33, 0xffff, 0x0b35, 0x0b36, 0x0b37, 0x0b38,
        0x0b39, 0xffff, 0x0b3e, 0x0b3f, 0x0b40, 0x0b41, 0x0b42, 0x0b43,
        0xffff, 0x0b47, 0x0b48, 0xffff, 0xffff, 0x0b4b, 0x0b4c, 0xffff,
        0x0b4d, 0x0b3c, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0b66, 0x0b67, 0x0b68, 0x0b69, 0x0b6a, 0x0b6b, 0x0b6c,
        0x0b6d, 0x0b6e, 0x0b6f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0c81, 0x0c82, 0x0c83, 0x0c85, 0x0c86, 0x0c87, 0x0c88,
        0x0c89, 0x0c8a, 0x0c8b, 0x0c8e, 0x0c8f, 0x0c90, 0xffff, 0x0c92,
        0x0c93, 0x0c94, 0xffff, 0x0c95, 0x0c96, 0x0c97, 0x0c98, 0x0c99,
        0x0c9a, 0x0c9b, 0x0c9c, 0x0c9d, 0x0c9e, 0x0c9f, 0x0ca0, 0x0ca1,
        0x0ca2, 0x0ca3, 0x0ca4, 0x0ca5, 0x0ca6, 0x0ca7, 0x0ca8, 0xffff,
        0x0caa, 0x0cab, 0x0cac, 0x0cad, 0x0cae, 0x0caf, 0xffff, 0x0cb0,
        0x0cb1, 0x0cb2, 0x0cb3, 0xffff, 0x0cb5, 0x0cb6, 0x0cb7, 0x0cb8,
        0x0cb9, 0xffff, 0x0cbe, 0x0cbf, 0x0cc0, 0x0cc1, 0x0cc2, 0x0cc3,
        0x0cc6, 0x0cc7, 0x0cc8, 0xffff, 0x0cca, 0x0ccb, 0x0ccc, 0xffff,
        0x0ccd, 0x0cbc, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0ce6, 0x0ce7, 0x0ce8, 0x0ce9, 0x0cea, 0x0ceb, 0x0cec,
        0x0ced, 0x0cee, 0x0cef, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0d01, 0x0d02, 0x0d03, 0x0d05, 0x0d06, 0x0d07, 0x0d08,
        0x0d09, 0x0d0a, 0x0d0b, 0x0d0e, 0x0d0f, 0x0d10, 0xffff, 0x0d12,
        0x0d13, 0x0d14, 0xffff, 0x0d15, 0x0d16, 0x0d17, 0x0d18, 0x0d19,
        0x0d1a, 0x0d1b, 0x0d1c, 0x0d1d, 0x0d1e, 0x0d1f, 0x0d20, 0x0d21,
        0x0d22, 0x0d23, 0x0d24, 0x0d25, 0x0d26, 0x0d27, 0x0d28, 0x0d29,
        0x0d2a, 0x0d2b, 0x0d2c, 0x0d2d, 0x0d2e, 0x0d2f, 0x0d5f, 0x0d30,
        0x0d31, 0x0d32, 0x0d33, 0x0d34, 0x0d35, 0x0d36, 0x0d37, 0x0d38,
        0x0d39, 0xffff, 0x0d3e, 0x0d3f, 0x0d40, 0x0d41, 0x0d42, 0x0d43,
        0x0d46, 0x0d47, 0x0d48, 0xffff, 0x0d4a, 0x0d4b, 0x0d4c, 0xffff,
        0x0d4d, 0x0d3c, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0d66, 0x0d67, 0x0d68, 0x0d69, 0x0d6a, 0x0d6b, 0x0d6c,
        0x0d6d, 0x0d6e, 0x0d6f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0a81, 0x0a82, 0x0a83, 0x0a85, 0x0a86, 0x0a87, 0x0a88,
        0x0a89, 0x0a8a, 0x0a8b, 0xffff, 0x0a8f, 0x0a90, 0x0a8d, 0xffff,
        0x0a93, 0x0a94, 0x0a91, 0x0a95, 0x0a96, 0x0a97, 0x0a98, 0x0a99,
        0x0a9a, 0x0a9b, 0x0a9c, 0x0a9d, 0x0a9e, 0x0a9f, 0x0aa0, 0x0aa1,
        0x0aa2, 0x0aa3, 0x0aa4, 0x0aa5, 0x0aa6, 0x0aa7, 0x0aa8, 0xffff,
        0x0aaa, 0x0aab, 0x0aac, 0x0aad, 0x0aae, 0x0aaf, 0xffff, 0x0ab0,
        0xffff, 0x0ab2, 0x0ab3, 0xffff, 0x0ab5, 0x0ab6, 0x0ab7, 0x0ab8,
        0x0ab9, 0xffff, 0x0abe, 0x0abf, 0x0ac0, 0x0ac1, 0x0ac2, 0x0ac3,
        0xffff, 0x0ac7, 0x0ac8, 0x0ac5, 0xffff, 0x0acb, 0x0acc, 0x0ac9,
        0x0acd, 0x0abc, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0ae6, 0x0ae7, 0x0ae8, 0x0ae9, 0x0aea, 0x0aeb, 0x0aec,
        0x0aed, 0x0aee, 0x0aef, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0a01, 0x0a02, 0x0a03, 0x0a05, 0x0a06, 0x0a07, 0x0a08,
        0x0a09, 0x0a0a, 0xffff, 0xffff, 0x0a0f, 0x0a10, 0xffff, 0xffff,
        0x0a13, 0x0a14, 0xffff, 0x0a15, 0x0a16, 0x0a17, 0x0a18, 0x0a19,
        0x0a1a, 0x0a1b, 0x0a1c, 0x0a1d, 0x0a1e, 0x0a1f, 0x0a20, 0x0a21,
        0x0a22, 0x0a23, 0x0a24, 0x0a25, 0x0a26, 0x0a27, 0x0a28, 0xffff,
        0x0a2a, 0x0a2b, 0x0a2c, 0x0a2d, 0x0a2e, 0x0a2f, 0xffff, 0x0a30,
        0xffff, 0x0a32, 0x0a33, 0xffff, 0x0a35, 0x0a36, 0xffff, 0x0a38,
        0x0a39, 0xffff, 0x0a3e, 0x0a3f, 0x0a40, 0x0a41, 0x0a42, 0xffff,
        0xffff, 0x0a47, 0x0a48, 0xffff, 0xffff, 0x0a4b, 0x0a4c, 0xffff,
        0x0a4d, 0x0a3c, 0x0964, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0a66, 0x0a67, 0x0a68, 0x0a69, 0x0a6a, 0x0a6b, 0x0a6c,
        0x0a6d, 0x0a6e, 0x0a6f, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
];

/// Forms selected by a following nukta byte.
static FORWARD_NUKTA: [[u16; 96]; 10] = [
    [
        0xffff, 0x0950, 0xffff, 0xffff, 0xffff, 0xffff, 0x090c, 0x0961,
        0xffff, 0xffff, 0x0960, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0958, 0x0959, 0x095a, 0xffff, 0xffff,
        0xffff, 0xffff, 0x095b, 0xffff, 0xffff, 0xffff, 0xffff, 0x095c,
        0x095d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0929, 0xffff,
        0xffff, 0x095e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0931,
        0xffff, 0xffff, 0x0934, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0962, 0x0963, 0xffff, 0xffff, 0x0944,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x093d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x098c, 0x09e1,
        0xffff, 0xffff, 0x09e0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x09dc,
        0x09dd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x09e2, 0x09e3, 0xffff, 0xffff, 0x09c4,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x09bd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0ba9, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0bb1,
        0xffff, 0xffff, 0x0bb4, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0c0c, 0x0c61,
        0xffff, 0xffff, 0x0c60, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0c58, 0x0c59, 0x0c5a, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0c5d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0c31,
        0xffff, 0xffff, 0x0c34, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0c62, 0x0c63, 0xffff, 0xffff, 0x0c44,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0c3d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x098c, 0x09e1,
        0xffff, 0xffff, 0x09e0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x09dc,
        0x09dd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x09e2, 0x09e3, 0xffff, 0xffff, 0x09c4,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x09bd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0b0c, 0x0b61,
        0xffff, 0xffff, 0x0b60, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0b5c,
        0x0b5d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0b62, 0x0b63, 0xffff, 0xffff, 0x0b44,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0b3d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0c8c, 0x0ce1,
        0xffff, 0xffff, 0x0ce0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0x0cdd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0cde, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0cb1,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0ce2, 0x0ce3, 0xffff, 0xffff, 0x0cc4,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0cbd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0d0c, 0x0d61,
        0xffff, 0xffff, 0x0d60, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0d58, 0x0d59, 0x0d5a, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0d5b, 0xffff, 0xffff, 0xffff, 0xffff, 0x0d5c,
        0x0d5d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0d29, 0xffff,
        0xffff, 0x0d5e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0x0d31,
        0xffff, 0xffff, 0x0d34, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0d62, 0x0d63, 0xffff, 0xffff, 0x0d44,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0d3d, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0x0ad0, 0xffff, 0xffff, 0xffff, 0xffff, 0x0a8c, 0x0ae1,
        0xffff, 0xffff, 0x0ae0, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0x0ae2, 0x0ae3, 0xffff, 0xffff, 0x0ac4,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0abd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
    [
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0x0a59, 0x0a5a, 0xffff, 0xffff,
        0xffff, 0xffff, 0x0a5b, 0xffff, 0xffff, 0xffff, 0xffff, 0x0a5c,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0x0a5e, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
        0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    ],
];

static BACKWARD: [u16; 0x480] = [
    0x0000, 0x02a1, 0x02a2, 0x02a3, 0x0000, 0x02a4, 0x02a5, 0x02a6,
    0x02a7, 0x02a8, 0x02a9, 0x02aa, 0x12a6, 0x02ae, 0x02ab, 0x02ac,
    0x02ad, 0x02b2, 0x02af, 0x02b0, 0x02b1, 0x02b3, 0x02b4, 0x02b5,
    0x02b6, 0x02b7, 0x02b8, 0x02b9, 0x02ba, 0x02bb, 0x02bc, 0x02bd,
    0x02be, 0x02bf, 0x02c0, 0x02c1, 0x02c2, 0x02c3, 0x02c4, 0x02c5,
    0x02c6, 0x02c7, 0x02c8, 0x02c9, 0x02ca, 0x02cb, 0x02cc, 0x02cd,
    0x02cf, 0x02d0, 0x02d1, 0x02d2, 0x02d3, 0x02d4, 0x02d5, 0x02d6,
    0x02d7, 0x02d8, 0x0000, 0x0000, 0x02e9, 0x12ea, 0x02da, 0x02db,
    0x02dc, 0x02dd, 0x02de, 0x02df, 0x12df, 0x02e3, 0x02e0, 0x02e1,
    0x02e2, 0x02e7, 0x02e4, 0x02e5, 0x02e6, 0x02e8, 0x0000, 0x0000,
    0x12a1, 0x0000, 0x22b8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x12b3, 0x12b4, 0x12b5, 0x12ba, 0x12bf, 0x12c0, 0x12c9, 0x02ce,
    0x12aa, 0x12a7, 0x12db, 0x12dc, 0x00ea, 0x0000, 0x02f1, 0x02f2,
    0x02f3, 0x02f4, 0x02f5, 0x02f6, 0x02f7, 0x02f8, 0x02f9, 0x02fa,
    0x22bf, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x03a1, 0x03a2, 0x03a3, 0x0000, 0x03a4, 0x03a5, 0x03a6,
    0x03a7, 0x03a8, 0x03a9, 0x03aa, 0x13a6, 0x0000, 0x0000, 0x03ac,
    0x03ad, 0x0000, 0x0000, 0x03b0, 0x03b1, 0x03b3, 0x03b4, 0x03b5,
    0x03b6, 0x03b7, 0x03b8, 0x03b9, 0x03ba, 0x03bb, 0x03bc, 0x03bd,
    0x03be, 0x03bf, 0x03c0, 0x03c1, 0x03c2, 0x03c3, 0x03c4, 0x03c5,
    0x03c6, 0x0000, 0x03c8, 0x03c9, 0x03ca, 0x03cb, 0x03cc, 0x03cd,
    0x03cf, 0x0000, 0x03d1, 0x0000, 0x0000, 0x0000, 0x03d5, 0x03d6,
    0x03d7, 0x03d8, 0x0000, 0x0000, 0x03e9, 0x13ea, 0x03da, 0x03db,
    0x03dc, 0x03dd, 0x03de, 0x03df, 0x13df, 0x0000, 0x0000, 0x03e1,
    0x03e2, 0x0000, 0x0000, 0x03e5, 0x03e6, 0x03e8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x13bf, 0x13c0, 0x0000, 0x03ce,
    0x13aa, 0x13a7, 0x13db, 0x13dc, 0x0000, 0x0000, 0x03f1, 0x03f2,
    0x03f3, 0x03f4, 0x03f5, 0x03f6, 0x03f7, 0x03f8, 0x03f9, 0x03fa,
    0x06cf, 0x06d4, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0ba1, 0x0ba2, 0x0ba3, 0x0000, 0x0ba4, 0x0ba5, 0x0ba6,
    0x0ba7, 0x0ba8, 0x0ba9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0bac,
    0x0bad, 0x0000, 0x0000, 0x0bb0, 0x0bb1, 0x0bb3, 0x0bb4, 0x0bb5,
    0x0bb6, 0x0bb7, 0x0bb8, 0x0bb9, 0x0bba, 0x0bbb, 0x0bbc, 0x0bbd,
    0x0bbe, 0x0bbf, 0x0bc0, 0x0bc1, 0x0bc2, 0x0bc3, 0x0bc4, 0x0bc5,
    0x0bc6, 0x0000, 0x0bc8, 0x0bc9, 0x0bca, 0x0bcb, 0x0bcc, 0x0bcd,
    0x0bcf, 0x0000, 0x0bd1, 0x0bd2, 0x0000, 0x0bd4, 0x0bd5, 0x0000,
    0x0bd7, 0x0bd8, 0x0000, 0x0000, 0x0be9, 0x0000, 0x0bda, 0x0bdb,
    0x0bdc, 0x0bdd, 0x0bde, 0x0000, 0x0000, 0x0000, 0x0000, 0x0be1,
    0x0be2, 0x0000, 0x0000, 0x0be5, 0x0be6, 0x0be8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x1bb4, 0x1bb5, 0x1bba, 0x1bbf, 0x0000, 0x1bc9, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0bf1, 0x0bf2,
    0x0bf3, 0x0bf4, 0x0bf5, 0x0bf6, 0x0bf7, 0x0bf8, 0x0bf9, 0x0bfa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0aa1, 0x0aa2, 0x0aa3, 0x0000, 0x0aa4, 0x0aa5, 0x0aa6,
    0x0aa7, 0x0aa8, 0x0aa9, 0x0aaa, 0x1aa6, 0x0aae, 0x0000, 0x0aac,
    0x0aad, 0x0ab2, 0x0000, 0x0ab0, 0x0ab1, 0x0ab3, 0x0ab4, 0x0ab5,
    0x0ab6, 0x0ab7, 0x0ab8, 0x0ab9, 0x0aba, 0x0abb, 0x0abc, 0x0abd,
    0x0abe, 0x0abf, 0x0ac0, 0x0ac1, 0x0ac2, 0x0ac3, 0x0ac4, 0x0ac5,
    0x0ac6, 0x0000, 0x0ac8, 0x0ac9, 0x0aca, 0x0acb, 0x0acc, 0x0acd,
    0x0acf, 0x0000, 0x0ad1, 0x0ad2, 0x0000, 0x0ad4, 0x0ad5, 0x0ad6,
    0x0ad7, 0x0ad8, 0x0000, 0x0000, 0x0ae9, 0x1aea, 0x0ada, 0x0adb,
    0x0adc, 0x0add, 0x0ade, 0x0adf, 0x1adf, 0x0ae3, 0x0000, 0x0ae1,
    0x0ae2, 0x0ae7, 0x0000, 0x0ae5, 0x0ae6, 0x0ae8, 0x0000, 0x0000,
    0x1aa1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x1aaa, 0x1aa7, 0x1adb, 0x1adc, 0x0000, 0x0000, 0x0af1, 0x0af2,
    0x0af3, 0x0af4, 0x0af5, 0x0af6, 0x0af7, 0x0af8, 0x0af9, 0x0afa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x07a1, 0x07a2, 0x07a3, 0x0000, 0x07a4, 0x07a5, 0x07a6,
    0x07a7, 0x07a8, 0x07a9, 0x07aa, 0x17a6, 0x0000, 0x0000, 0x07ac,
    0x07ad, 0x0000, 0x0000, 0x07b0, 0x07b1, 0x07b3, 0x07b4, 0x07b5,
    0x07b6, 0x07b7, 0x07b8, 0x07b9, 0x07ba, 0x07bb, 0x07bc, 0x07bd,
    0x07be, 0x07bf, 0x07c0, 0x07c1, 0x07c2, 0x07c3, 0x07c4, 0x07c5,
    0x07c6, 0x0000, 0x07c8, 0x07c9, 0x07ca, 0x07cb, 0x07cc, 0x07cd,
    0x07cf, 0x0000, 0x07d1, 0x07d2, 0x0000, 0x07d4, 0x07d5, 0x07d6,
    0x07d7, 0x07d8, 0x0000, 0x0000, 0x07e9, 0x17ea, 0x07da, 0x07db,
    0x07dc, 0x07dd, 0x07de, 0x07df, 0x17df, 0x0000, 0x0000, 0x07e1,
    0x07e2, 0x0000, 0x0000, 0x07e5, 0x07e6, 0x07e8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x17bf, 0x17c0, 0x0000, 0x07ce,
    0x17aa, 0x17a7, 0x17db, 0x17dc, 0x0000, 0x0000, 0x07f1, 0x07f2,
    0x07f3, 0x07f4, 0x07f5, 0x07f6, 0x07f7, 0x07f8, 0x07f9, 0x07fa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x04a2, 0x04a3, 0x0000, 0x04a4, 0x04a5, 0x04a6,
    0x04a7, 0x04a8, 0x04a9, 0x0000, 0x0000, 0x0000, 0x04ab, 0x04ac,
    0x04ad, 0x0000, 0x04af, 0x04b0, 0x04b1, 0x04b3, 0x0000, 0x0000,
    0x0000, 0x04b7, 0x04b8, 0x0000, 0x04ba, 0x0000, 0x04bc, 0x04bd,
    0x0000, 0x0000, 0x0000, 0x04c1, 0x04c2, 0x0000, 0x0000, 0x0000,
    0x04c6, 0x04c7, 0x04c8, 0x0000, 0x0000, 0x0000, 0x04cc, 0x04cd,
    0x04cf, 0x04d0, 0x04d1, 0x04d2, 0x04d3, 0x04d4, 0x04d5, 0x04d6,
    0x04d7, 0x04d8, 0x0000, 0x0000, 0x0000, 0x0000, 0x04da, 0x04db,
    0x04dc, 0x04dd, 0x04de, 0x0000, 0x0000, 0x0000, 0x04e0, 0x04e1,
    0x04e2, 0x0000, 0x04e4, 0x04e5, 0x04e6, 0x04e8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x04f1, 0x04f2,
    0x04f3, 0x04f4, 0x04f5, 0x04f6, 0x04f7, 0x04f8, 0x04f9, 0x04fa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x05a1, 0x05a2, 0x05a3, 0x0000, 0x05a4, 0x05a5, 0x05a6,
    0x05a7, 0x05a8, 0x05a9, 0x05aa, 0x15a6, 0x0000, 0x05ab, 0x05ac,
    0x05ad, 0x0000, 0x05af, 0x05b0, 0x05b1, 0x05b3, 0x05b4, 0x05b5,
    0x05b6, 0x05b7, 0x05b8, 0x05b9, 0x05ba, 0x05bb, 0x05bc, 0x05bd,
    0x05be, 0x05bf, 0x05c0, 0x05c1, 0x05c2, 0x05c3, 0x05c4, 0x05c5,
    0x05c6, 0x0000, 0x05c8, 0x05c9, 0x05ca, 0x05cb, 0x05cc, 0x05cd,
    0x05cf, 0x05d0, 0x05d1, 0x05d2, 0x05d3, 0x05d4, 0x05d5, 0x05d6,
    0x05d7, 0x05d8, 0x0000, 0x0000, 0x05e9, 0x15ea, 0x05da, 0x05db,
    0x05dc, 0x05dd, 0x05de, 0x05df, 0x15df, 0x0000, 0x05e0, 0x05e1,
    0x05e2, 0x0000, 0x05e4, 0x05e5, 0x05e6, 0x05e8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x15b3, 0x15b4, 0x15b5, 0x0000, 0x0000, 0x15c0, 0x0000, 0x0000,
    0x15aa, 0x15a7, 0x15db, 0x15dc, 0x0000, 0x0000, 0x05f1, 0x05f2,
    0x05f3, 0x05f4, 0x05f5, 0x05f6, 0x05f7, 0x05f8, 0x05f9, 0x05fa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x08a1, 0x08a2, 0x08a3, 0x0000, 0x08a4, 0x08a5, 0x08a6,
    0x08a7, 0x08a8, 0x08a9, 0x08aa, 0x18a6, 0x0000, 0x08ab, 0x08ac,
    0x08ad, 0x0000, 0x08af, 0x08b0, 0x08b1, 0x08b3, 0x08b4, 0x08b5,
    0x08b6, 0x08b7, 0x08b8, 0x08b9, 0x08ba, 0x08bb, 0x08bc, 0x08bd,
    0x08be, 0x08bf, 0x08c0, 0x08c1, 0x08c2, 0x08c3, 0x08c4, 0x08c5,
    0x08c6, 0x0000, 0x08c8, 0x08c9, 0x08ca, 0x08cb, 0x08cc, 0x08cd,
    0x08cf, 0x08d0, 0x08d1, 0x08d2, 0x0000, 0x08d4, 0x08d5, 0x08d6,
    0x08d7, 0x08d8, 0x0000, 0x0000, 0x08e9, 0x18ea, 0x08da, 0x08db,
    0x08dc, 0x08dd, 0x08de, 0x08df, 0x18df, 0x0000, 0x08e0, 0x08e1,
    0x08e2, 0x0000, 0x08e4, 0x08e5, 0x08e6, 0x08e8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x18c0, 0x18c9, 0x0000,
    0x18aa, 0x18a7, 0x18db, 0x18dc, 0x0000, 0x0000, 0x08f1, 0x08f2,
    0x08f3, 0x08f4, 0x08f5, 0x08f6, 0x08f7, 0x08f8, 0x08f9, 0x08fa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x09a1, 0x09a2, 0x09a3, 0x0000, 0x09a4, 0x09a5, 0x09a6,
    0x09a7, 0x09a8, 0x09a9, 0x09aa, 0x19a6, 0x0000, 0x09ab, 0x09ac,
    0x09ad, 0x0000, 0x09af, 0x09b0, 0x09b1, 0x09b3, 0x09b4, 0x09b5,
    0x09b6, 0x09b7, 0x09b8, 0x09b9, 0x09ba, 0x09bb, 0x09bc, 0x09bd,
    0x09be, 0x09bf, 0x09c0, 0x09c1, 0x09c2, 0x09c3, 0x09c4, 0x09c5,
    0x09c6, 0x09c7, 0x09c8, 0x09c9, 0x09ca, 0x09cb, 0x09cc, 0x09cd,
    0x09cf, 0x09d0, 0x09d1, 0x09d2, 0x09d3, 0x09d4, 0x09d5, 0x09d6,
    0x09d7, 0x09d8, 0x0000, 0x0000, 0x09e9, 0x19ea, 0x09da, 0x09db,
    0x09dc, 0x09dd, 0x09de, 0x09df, 0x19df, 0x0000, 0x09e0, 0x09e1,
    0x09e2, 0x0000, 0x09e4, 0x09e5, 0x09e6, 0x09e8, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x19b3, 0x19b4, 0x19b5, 0x19ba, 0x19bf, 0x19c0, 0x19c9, 0x09ce,
    0x19aa, 0x19a7, 0x19db, 0x19dc, 0x0000, 0x0000, 0x09f1, 0x09f2,
    0x09f3, 0x09f4, 0x09f5, 0x09f6, 0x09f7, 0x09f8, 0x09f9, 0x09fa,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[inline]
fn row(script: u8) -> Option<usize> {
    if (FIRST_SCRIPT..=LAST_SCRIPT).contains(&script) {
        Some((script - FIRST_SCRIPT) as usize)
    } else {
        None
    }
}

/// Returns the plain character for `code` under `script`, or 0xFFFF.
#[inline]
pub fn forward(script: u8, code: u8) -> u16 {
    match row(script) {
        Some(r) if code >= 0xa0 => FORWARD[r][(code - 0xa0) as usize],
        _ => 0xffff,
    }
}

/// Returns the character that `code` followed by a nukta forms under `script`, or 0xFFFF.
#[inline]
pub fn forward_nukta(script: u8, code: u8) -> u16 {
    match row(script) {
        Some(r) if code >= 0xa0 => FORWARD_NUKTA[r][(code - 0xa0) as usize],
        _ => 0xffff,
    }
}

/// Returns the character for the EXT-prefixed `code`, or 0xFFFF.
/// Only Devanagari has extended characters.
#[inline]
pub fn forward_ext(script: u8, code: u8) -> u16 {
    match (script, code) {
        (2, 0xb8) => 0x0952,
        (2, 0xbf) => 0x0970,
        _ => 0xffff,
    }
}

/// Returns the packed encoding of `ch`, or 0 when it is not an ISCII character.
///
/// The low byte is the ISCII byte and bits 8 to 11 hold the script number
/// (`NEUTRAL_SCRIPT` if any script will do). `NUKTA_FLAG` and `EXT_FLAG`
/// mark the two-byte forms.
#[inline]
pub fn backward(ch: u32) -> u16 {
    let offset = ch.wrapping_sub(BACKWARD_BASE) as usize;
    if offset < BACKWARD.len() {
        BACKWARD[offset]
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_table() {
        for script in FIRST_SCRIPT..=LAST_SCRIPT {
            for code in 0xa0..=0xffu8 {
                let ch = forward(script, code);
                if ch == 0xffff {
                    continue;
                }
                let packed = backward(ch as u32);
                assert_eq!(packed & 0xff, code as u16, "{:04x} in script {}", ch, script);
                assert_eq!(packed & NUKTA_FLAG, 0);
                // the packed script decodes the byte the same way
                let owner = ((packed >> 8) & 0xf) as u8;
                if owner != NEUTRAL_SCRIPT {
                    assert_eq!(forward(owner, code), ch);
                }
            }
        }
    }

    #[test]
    fn test_nukta_forms_have_plain_forms() {
        for script in FIRST_SCRIPT..=LAST_SCRIPT {
            for code in 0xa0..=0xffu8 {
                if forward_nukta(script, code) != 0xffff {
                    assert!(forward(script, code) != 0xffff);
                }
            }
        }
    }

    #[test]
    fn test_devanagari_samples() {
        assert_eq!(forward(2, 0xb3), 0x0915);
        assert_eq!(forward_nukta(2, 0xb3), 0x0958);
        assert_eq!(forward(2, 0xea), 0x0964);
        assert_eq!(forward(3, 0xea), 0x0964);
        assert_eq!(backward(0x0958), NUKTA_FLAG | 0x0200 | 0xb3);
        assert_eq!(backward(0x0952), EXT_FLAG | 0x0200 | 0xb8);
        assert_eq!(backward(0x0964), 0x00ea);
        assert_eq!(backward(0x0041), 0);
    }

    #[test]
    fn test_assamese_letters() {
        assert_eq!(forward(6, 0xcf), 0x09f0);
        assert_eq!(forward(3, 0xcf), 0x09b0);
        assert_eq!(backward(0x09f0), 0x0600 | 0xcf);
        assert_eq!(backward(0x09b0), 0x0300 | 0xcf);
    }
}
