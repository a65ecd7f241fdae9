//! Catalog of predefined CRC algorithms.
//!
//! Every entry binds a RevEng-style name (and its common aliases) to a
//! [`CrcParams`], the expected CRC of the ASCII string `"123456789"`
//! (the *check* value) and the expected *residue*. The catalog is a single
//! frozen static table — process-wide, read-only, no registration step.
//!
//! Check and residue values double as a built-in self test:
//! [`self_check`] runs the full table-generation + processor pipeline over
//! the reference message and compares the result against the stored value.
//!
//! ```
//! use crc_engine::catalog;
//!
//! let params = catalog::lookup("CRC-32/ISO-HDLC")?;
//! assert_eq!(params.check(), Ok(0xCBF43926));
//! assert!(catalog::self_check("CRC-32/ISO-HDLC")?);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```

use crate::{error::CatalogLookupError, params::CrcParams, processor::Processor};

#[cfg(feature = "alloc")]
use crate::tables::LookupTable;

/// The fixed reference message for check values.
pub const CHECK_MESSAGE: &[u8] = b"123456789";

/// One named algorithm: parameters plus its expected check and residue.
#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
  name: &'static str,
  aliases: &'static [&'static str],
  params: CrcParams,
  check: u64,
  residue: u64,
}

impl CatalogEntry {
  /// Primary RevEng-style name, e.g. `"CRC-32/ISO-HDLC"`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Other names this algorithm is commonly known under.
  #[inline]
  #[must_use]
  pub const fn aliases(&self) -> &'static [&'static str] {
    self.aliases
  }

  /// The algorithm's parameter set.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// Expected CRC of [`CHECK_MESSAGE`].
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u64 {
    self.check
  }

  /// Expected register residue after any valid codeword.
  #[inline]
  #[must_use]
  pub const fn residue(&self) -> u64 {
    self.residue
  }

  fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }
}

macro_rules! catalog {
  ($(
    $name:literal $(| $alias:literal)* =>
      ($width:expr, $poly:expr, $init:expr, $refin:expr, $refout:expr, $xorout:expr,
       check: $check:expr, residue: $residue:expr)
  ),+ $(,)?) => {
    /// Every algorithm known to the catalog, ordered by width then name.
    pub static CATALOG: &[CatalogEntry] = &[
      $(CatalogEntry {
        name: $name,
        aliases: &[$($alias),*],
        params: CrcParams {
          width: $width,
          polynomial: $poly,
          initial: $init,
          reflect_in: $refin,
          reflect_out: $refout,
          xor_out: $xorout,
        },
        check: $check,
        residue: $residue,
      }),+
    ];
  };
}

catalog! {
  "CRC-3/GSM" => (3, 0x3, 0x0, false, false, 0x7, check: 0x4, residue: 0x2),
  "CRC-3/ROHC" => (3, 0x3, 0x7, true, true, 0x0, check: 0x6, residue: 0x0),
  "CRC-4/G-704" | "CRC-4/ITU" => (4, 0x3, 0x0, true, true, 0x0, check: 0x7, residue: 0x0),
  "CRC-4/INTERLAKEN" => (4, 0x3, 0xF, false, false, 0xF, check: 0xB, residue: 0x2),
  "CRC-5/EPC-C1G2" | "CRC-5/EPC" => (5, 0x09, 0x09, false, false, 0x00, check: 0x00, residue: 0x00),
  "CRC-5/G-704" | "CRC-5/ITU" => (5, 0x15, 0x00, true, true, 0x00, check: 0x07, residue: 0x00),
  "CRC-5/USB" => (5, 0x05, 0x1F, true, true, 0x1F, check: 0x19, residue: 0x06),
  "CRC-6/CDMA2000-A" => (6, 0x27, 0x3F, false, false, 0x00, check: 0x0D, residue: 0x00),
  "CRC-6/CDMA2000-B" => (6, 0x07, 0x3F, false, false, 0x00, check: 0x3B, residue: 0x00),
  "CRC-6/DARC" => (6, 0x19, 0x00, true, true, 0x00, check: 0x26, residue: 0x00),
  "CRC-6/G-704" | "CRC-6/ITU" => (6, 0x03, 0x00, true, true, 0x00, check: 0x06, residue: 0x00),
  "CRC-6/GSM" => (6, 0x2F, 0x00, false, false, 0x3F, check: 0x13, residue: 0x3A),
  "CRC-7/MMC" => (7, 0x09, 0x00, false, false, 0x00, check: 0x75, residue: 0x00),
  "CRC-7/ROHC" => (7, 0x4F, 0x7F, true, true, 0x00, check: 0x53, residue: 0x00),
  "CRC-7/UMTS" => (7, 0x45, 0x00, false, false, 0x00, check: 0x61, residue: 0x00),
  "CRC-8/AUTOSAR" => (8, 0x2F, 0xFF, false, false, 0xFF, check: 0xDF, residue: 0x42),
  "CRC-8/BLUETOOTH" => (8, 0xA7, 0x00, true, true, 0x00, check: 0x26, residue: 0x00),
  "CRC-8/CDMA2000" => (8, 0x9B, 0xFF, false, false, 0x00, check: 0xDA, residue: 0x00),
  "CRC-8/DARC" => (8, 0x39, 0x00, true, true, 0x00, check: 0x15, residue: 0x00),
  "CRC-8/DVB-S2" => (8, 0xD5, 0x00, false, false, 0x00, check: 0xBC, residue: 0x00),
  "CRC-8/GSM-A" => (8, 0x1D, 0x00, false, false, 0x00, check: 0x37, residue: 0x00),
  "CRC-8/GSM-B" => (8, 0x49, 0x00, false, false, 0xFF, check: 0x94, residue: 0x53),
  "CRC-8/HITAG" => (8, 0x1D, 0xFF, false, false, 0x00, check: 0xB4, residue: 0x00),
  "CRC-8/I-432-1" | "CRC-8/ITU" => (8, 0x07, 0x00, false, false, 0x55, check: 0xA1, residue: 0xAC),
  "CRC-8/I-CODE" => (8, 0x1D, 0xFD, false, false, 0x00, check: 0x7E, residue: 0x00),
  "CRC-8/LTE" => (8, 0x9B, 0x00, false, false, 0x00, check: 0xEA, residue: 0x00),
  "CRC-8/MAXIM-DOW" | "CRC-8/MAXIM" => (8, 0x31, 0x00, true, true, 0x00, check: 0xA1, residue: 0x00),
  "CRC-8/MIFARE-MAD" => (8, 0x1D, 0xC7, false, false, 0x00, check: 0x99, residue: 0x00),
  "CRC-8/NRSC-5" => (8, 0x31, 0xFF, false, false, 0x00, check: 0xF7, residue: 0x00),
  "CRC-8/OPENSAFETY" => (8, 0x2F, 0x00, false, false, 0x00, check: 0x3E, residue: 0x00),
  "CRC-8/ROHC" => (8, 0x07, 0xFF, true, true, 0x00, check: 0xD0, residue: 0x00),
  "CRC-8/SAE-J1850" => (8, 0x1D, 0xFF, false, false, 0xFF, check: 0x4B, residue: 0xC4),
  "CRC-8/SMBUS" => (8, 0x07, 0x00, false, false, 0x00, check: 0xF4, residue: 0x00),
  "CRC-8/TECH-3250" | "CRC-8/AES" | "CRC-8/ETU" =>
    (8, 0x1D, 0xFF, true, true, 0x00, check: 0x97, residue: 0x00),
  "CRC-8/WCDMA" => (8, 0x9B, 0x00, true, true, 0x00, check: 0x25, residue: 0x00),
  "CRC-10/ATM" | "CRC-10/I-610" => (10, 0x233, 0x000, false, false, 0x000, check: 0x199, residue: 0x000),
  "CRC-10/CDMA2000" => (10, 0x3D9, 0x3FF, false, false, 0x000, check: 0x233, residue: 0x000),
  "CRC-10/GSM" => (10, 0x175, 0x000, false, false, 0x3FF, check: 0x12A, residue: 0x0C6),
  "CRC-11/FLEXRAY" => (11, 0x385, 0x01A, false, false, 0x000, check: 0x5A3, residue: 0x000),
  "CRC-11/UMTS" => (11, 0x307, 0x000, false, false, 0x000, check: 0x061, residue: 0x000),
  "CRC-12/CDMA2000" => (12, 0xF13, 0xFFF, false, false, 0x000, check: 0xD4D, residue: 0x000),
  "CRC-12/DECT" => (12, 0x80F, 0x000, false, false, 0x000, check: 0xF5B, residue: 0x000),
  "CRC-12/GSM" => (12, 0xD31, 0x000, false, false, 0xFFF, check: 0xB34, residue: 0x178),
  "CRC-12/UMTS" | "CRC-12/3GPP" => (12, 0x80F, 0x000, false, true, 0x000, check: 0xDAF, residue: 0x000),
  "CRC-13/BBC" => (13, 0x1CF5, 0x0000, false, false, 0x0000, check: 0x04FA, residue: 0x0000),
  "CRC-14/DARC" => (14, 0x0805, 0x0000, true, true, 0x0000, check: 0x082D, residue: 0x0000),
  "CRC-14/GSM" => (14, 0x202D, 0x0000, false, false, 0x3FFF, check: 0x30AE, residue: 0x031E),
  "CRC-15/CAN" => (15, 0x4599, 0x0000, false, false, 0x0000, check: 0x059E, residue: 0x0000),
  "CRC-15/MPT1327" => (15, 0x6815, 0x0000, false, false, 0x0001, check: 0x2566, residue: 0x6815),
  "CRC-16/ARC" | "CRC-16/IBM" => (16, 0x8005, 0x0000, true, true, 0x0000, check: 0xBB3D, residue: 0x0000),
  "CRC-16/CDMA2000" => (16, 0xC867, 0xFFFF, false, false, 0x0000, check: 0x4C06, residue: 0x0000),
  "CRC-16/CMS" => (16, 0x8005, 0xFFFF, false, false, 0x0000, check: 0xAEE7, residue: 0x0000),
  "CRC-16/DDS-110" => (16, 0x8005, 0x800D, false, false, 0x0000, check: 0x9ECF, residue: 0x0000),
  "CRC-16/DECT-R" => (16, 0x0589, 0x0000, false, false, 0x0001, check: 0x007E, residue: 0x0589),
  "CRC-16/DECT-X" => (16, 0x0589, 0x0000, false, false, 0x0000, check: 0x007F, residue: 0x0000),
  "CRC-16/DNP" => (16, 0x3D65, 0x0000, true, true, 0xFFFF, check: 0xEA82, residue: 0x66C5),
  "CRC-16/EN-13757" => (16, 0x3D65, 0x0000, false, false, 0xFFFF, check: 0xC2B7, residue: 0xA366),
  "CRC-16/GENIBUS" | "CRC-16/DARC" | "CRC-16/EPC" | "CRC-16/EPC-C1G2" | "CRC-16/I-CODE" =>
    (16, 0x1021, 0xFFFF, false, false, 0xFFFF, check: 0xD64E, residue: 0x1D0F),
  "CRC-16/GSM" => (16, 0x1021, 0x0000, false, false, 0xFFFF, check: 0xCE3C, residue: 0x1D0F),
  "CRC-16/IBM-3740" | "CRC-16/AUTOSAR" | "CRC-16/CCITT-FALSE" =>
    (16, 0x1021, 0xFFFF, false, false, 0x0000, check: 0x29B1, residue: 0x0000),
  "CRC-16/IBM-SDLC" | "CRC-16/ISO-HDLC" | "CRC-16/ISO-IEC-14443-3-B" | "CRC-16/X-25" =>
    (16, 0x1021, 0xFFFF, true, true, 0xFFFF, check: 0x906E, residue: 0xF0B8),
  "CRC-16/ISO-IEC-14443-3-A" => (16, 0x1021, 0xC6C6, true, true, 0x0000, check: 0xBF05, residue: 0x0000),
  "CRC-16/KERMIT" | "CRC-16/BLUETOOTH" | "CRC-16/CCITT" | "CRC-16/CCITT-TRUE" | "CRC-16/V-41-LSB" =>
    (16, 0x1021, 0x0000, true, true, 0x0000, check: 0x2189, residue: 0x0000),
  "CRC-16/LJ1200" => (16, 0x6F63, 0x0000, false, false, 0x0000, check: 0xBDF4, residue: 0x0000),
  "CRC-16/M17" => (16, 0x5935, 0xFFFF, false, false, 0x0000, check: 0x772B, residue: 0x0000),
  "CRC-16/MAXIM-DOW" | "CRC-16/MAXIM" =>
    (16, 0x8005, 0x0000, true, true, 0xFFFF, check: 0x44C2, residue: 0xB001),
  "CRC-16/MCRF4XX" => (16, 0x1021, 0xFFFF, true, true, 0x0000, check: 0x6F91, residue: 0x0000),
  "CRC-16/MODBUS" => (16, 0x8005, 0xFFFF, true, true, 0x0000, check: 0x4B37, residue: 0x0000),
  "CRC-16/NRSC-5" => (16, 0x080B, 0xFFFF, true, true, 0x0000, check: 0xA066, residue: 0x0000),
  "CRC-16/OPENSAFETY-A" => (16, 0x5935, 0x0000, false, false, 0x0000, check: 0x5D38, residue: 0x0000),
  "CRC-16/OPENSAFETY-B" => (16, 0x755B, 0x0000, false, false, 0x0000, check: 0x20FE, residue: 0x0000),
  "CRC-16/PROFIBUS" | "CRC-16/IEC-61158-2" =>
    (16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, check: 0xA819, residue: 0xE394),
  "CRC-16/RIELLO" => (16, 0x1021, 0xB2AA, true, true, 0x0000, check: 0x63D0, residue: 0x0000),
  "CRC-16/SPI-FUJITSU" | "CRC-16/AUG-CCITT" =>
    (16, 0x1021, 0x1D0F, false, false, 0x0000, check: 0xE5CC, residue: 0x0000),
  "CRC-16/T10-DIF" => (16, 0x8BB7, 0x0000, false, false, 0x0000, check: 0xD0DB, residue: 0x0000),
  "CRC-16/TELEDISK" => (16, 0xA097, 0x0000, false, false, 0x0000, check: 0x0FB3, residue: 0x0000),
  "CRC-16/TMS37157" => (16, 0x1021, 0x89EC, true, true, 0x0000, check: 0x26B1, residue: 0x0000),
  "CRC-16/UMTS" | "CRC-16/BUYPASS" | "CRC-16/VERIFONE" =>
    (16, 0x8005, 0x0000, false, false, 0x0000, check: 0xFEE8, residue: 0x0000),
  "CRC-16/USB" => (16, 0x8005, 0xFFFF, true, true, 0xFFFF, check: 0xB4C8, residue: 0xB001),
  "CRC-16/XMODEM" | "CRC-16/ACORN" | "CRC-16/LTE" | "CRC-16/V-41-MSB" | "CRC-16/ZMODEM" =>
    (16, 0x1021, 0x0000, false, false, 0x0000, check: 0x31C3, residue: 0x0000),
  "CRC-17/CAN-FD" => (17, 0x1685B, 0x00000, false, false, 0x00000, check: 0x04F03, residue: 0x00000),
  "CRC-21/CAN-FD" => (21, 0x102899, 0x000000, false, false, 0x000000, check: 0x0ED841, residue: 0x000000),
  "CRC-24/BLE" => (24, 0x00065B, 0x555555, true, true, 0x000000, check: 0xC25A56, residue: 0x000000),
  "CRC-24/FLEXRAY-A" => (24, 0x5D6DCB, 0xFEDCBA, false, false, 0x000000, check: 0x7979BD, residue: 0x000000),
  "CRC-24/FLEXRAY-B" => (24, 0x5D6DCB, 0xABCDEF, false, false, 0x000000, check: 0x1F23B8, residue: 0x000000),
  "CRC-24/INTERLAKEN" => (24, 0x328B63, 0xFFFFFF, false, false, 0xFFFFFF, check: 0xB4F3E6, residue: 0x144E63),
  "CRC-24/LTE-A" => (24, 0x864CFB, 0x000000, false, false, 0x000000, check: 0xCDE703, residue: 0x000000),
  "CRC-24/LTE-B" => (24, 0x800063, 0x000000, false, false, 0x000000, check: 0x23EF52, residue: 0x000000),
  "CRC-24/OPENPGP" => (24, 0x864CFB, 0xB704CE, false, false, 0x000000, check: 0x21CF02, residue: 0x000000),
  "CRC-24/OS-9" => (24, 0x800063, 0xFFFFFF, false, false, 0xFFFFFF, check: 0x200FA5, residue: 0x800FE3),
  "CRC-30/CDMA" =>
    (30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF, check: 0x04C3_4ABF, residue: 0x34EF_A55A),
  "CRC-31/PHILIPS" =>
    (31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF, check: 0x0CE9_E46C, residue: 0x4EAF_26F1),
  "CRC-32/AIXM" =>
    (32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000, check: 0x3010_BF7F, residue: 0x0000_0000),
  "CRC-32/AUTOSAR" =>
    (32, 0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check: 0x1697_D06A, residue: 0x904C_DDBF),
  "CRC-32/BASE91-D" =>
    (32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check: 0x8731_5576, residue: 0x4527_0551),
  "CRC-32/BZIP2" | "CRC-32/AAL5" | "CRC-32/DECT-B" =>
    (32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, check: 0xFC89_1918, residue: 0xC704_DD7B),
  "CRC-32/CD-ROM-EDC" =>
    (32, 0x8001_801B, 0x0000_0000, true, true, 0x0000_0000, check: 0x6EC2_EDC4, residue: 0x0000_0000),
  "CRC-32/CKSUM" | "CRC-32/POSIX" =>
    (32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF, check: 0x765E_7680, residue: 0xC704_DD7B),
  "CRC-32/ISCSI" | "CRC-32/BASE91-C" | "CRC-32/CASTAGNOLI" | "CRC-32/INTERLAKEN" =>
    (32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check: 0xE306_9283, residue: 0xB798_B438),
  "CRC-32/ISO-HDLC" | "CRC-32/ADCCP" | "CRC-32/V-42" | "CRC-32/XZ" | "CRC-32/PKZIP" | "CRC-32/ETHERNET" =>
    (32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check: 0xCBF4_3926, residue: 0xDEBB_20E3),
  "CRC-32/JAMCRC" =>
    (32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000, check: 0x340B_C6D9, residue: 0x0000_0000),
  "CRC-32/MEF" =>
    (32, 0x741B_8CD7, 0xFFFF_FFFF, true, true, 0x0000_0000, check: 0xD2C2_2F51, residue: 0x0000_0000),
  "CRC-32/MPEG-2" =>
    (32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, check: 0x0376_E6E7, residue: 0x0000_0000),
  "CRC-32/XFER" =>
    (32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000, check: 0xBD0B_E338, residue: 0x0000_0000),
  "CRC-40/GSM" =>
    (40, 0x00_0482_0009, 0x00_0000_0000, false, false, 0xFF_FFFF_FFFF,
     check: 0xD4_164F_C646, residue: 0xC4_FF80_71FF),
  "CRC-64/ECMA-182" =>
    (64, 0x42F0_E1EB_A9EA_3693, 0x0000_0000_0000_0000, false, false, 0x0000_0000_0000_0000,
     check: 0x6C40_DF5F_0B49_7347, residue: 0x0000_0000_0000_0000),
  "CRC-64/GO-ISO" =>
    (64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF,
     check: 0xB909_56C7_75A4_1001, residue: 0x5300_0000_0000_0000),
  "CRC-64/MS" =>
    (64, 0x259C_84CB_A642_6349, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0x0000_0000_0000_0000,
     check: 0x75D4_B74F_024E_CEEA, residue: 0x0000_0000_0000_0000),
  "CRC-64/REDIS" =>
    (64, 0xAD93_D235_94C9_35A9, 0x0000_0000_0000_0000, true, true, 0x0000_0000_0000_0000,
     check: 0xE9C6_D914_C4B8_D9CA, residue: 0x0000_0000_0000_0000),
  "CRC-64/WE" =>
    (64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, false, false, 0xFFFF_FFFF_FFFF_FFFF,
     check: 0x62EC_59E3_F1A4_F00A, residue: 0xFCAC_BEBD_5931_A992),
  "CRC-64/XZ" | "CRC-64/ECMA" =>
    (64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF,
     check: 0x995D_C9BB_DF19_39FA, residue: 0x4995_8C9A_BD7D_353F),
}

/// Find an entry by primary name or alias (ASCII case-insensitive).
///
/// # Errors
///
/// [`CatalogLookupError`] when no entry matches.
pub fn entry(name: &str) -> Result<&'static CatalogEntry, CatalogLookupError> {
  CATALOG.iter().find(|e| e.matches(name)).ok_or(CatalogLookupError::new())
}

/// Look up the parameter set of a named algorithm.
///
/// # Errors
///
/// [`CatalogLookupError`] when no entry matches.
pub fn lookup(name: &str) -> Result<CrcParams, CatalogLookupError> {
  entry(name).map(|e| e.params)
}

/// Primary names of all catalog entries, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
  CATALOG.iter().map(|e| e.name)
}

/// Run the named algorithm over [`CHECK_MESSAGE`] and compare against the
/// stored check value.
///
/// With `alloc` enabled this exercises the whole pipeline — table
/// generation plus a table-accelerated processor; otherwise the bit-serial
/// processor.
///
/// # Errors
///
/// [`CatalogLookupError`] when no entry matches.
pub fn self_check(name: &str) -> Result<bool, CatalogLookupError> {
  let entry = entry(name)?;
  Ok(computed_check(entry.params) == Some(entry.check))
}

fn computed_check(params: CrcParams) -> Option<u64> {
  let mut processor = build_processor(params)?;
  processor.update(CHECK_MESSAGE);
  Some(processor.finalize())
}

#[cfg(feature = "alloc")]
fn build_processor(params: CrcParams) -> Option<Processor> {
  let table = LookupTable::generate(params, 8).ok()?;
  Processor::with_table(params, &table).ok()
}

#[cfg(not(feature = "alloc"))]
fn build_processor(params: CrcParams) -> Option<Processor> {
  Processor::new(params).ok()
}
