//! # upcean
//!
//! A Rust library for encoding the EAN/UPC family of linear barcodes: EAN-13, EAN-8,
//! EAN-2/EAN-5 add-ons, UPC-A, UPC-E and ISBN/SBN, including the linear component of
//! 2D-composite-linked symbols.
//!
//! ## Features
//!
//! - **Check digits**: Computed automatically, or verified when supplied by the caller
//! - **Add-ons**: EAN-2 and EAN-5 add-ons after a `+`, with a configurable gap
//! - **UPC-E**: Zero-suppression with a number system of 0 or 1
//! - **ISBN/SBN**: ISBN-10, ISBN-13 and SBN inputs, drawn as EAN-13 with the Bookland prefix
//! - **Composite**: Separator rows for a linked 2D component above the linear row
//!
//! ## Quick Start
//!
//! ```rust
//! use upcean::EanBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // EAN-13 from 12 digits; the check digit is computed
//! let symbol = EanBuilder::new(b"400638133393").build()?;
//! assert_eq!(symbol.text(), "4006381333931");
//!
//! let img = symbol.render(2); // 2 pixels per module
//! img.save("ean13.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use upcean::{EanBuilder, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = EanBuilder::new(b"036000291452+52495")
//!     .symbology(Symbology::UpcA) // Defaults to Symbology::Ean
//!     .check_digit(true)          // Last primary digit is a check digit to verify
//!     .addon_gap(10)              // Modules between symbol and add-on, 9 to 12 for UPC-A
//!     .build()?;
//!
//! assert_eq!(symbol.text(), "036000291452+52495");
//! println!("{}", symbol.to_str());
//! # Ok(())
//! # }
//! ```
//!
//! ### Composite
//!
//! ```rust
//! use upcean::{EanBuilder, RowHeight, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = EanBuilder::new(b"331234567890").symbology(Symbology::Ean).composite(true).build()?;
//!
//! assert_eq!(symbol.symbology(), Symbology::EanCc);
//! assert_eq!(symbol.rows(), 4);
//! assert_eq!(symbol.row_heights()[0], RowHeight::Fixed(2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbologies
//!
//! The symbology selects how the digits before `+` are read:
//!
//! - **Ean**: 1-5 digits give a bare add-on, 6-7 an EAN-8 and 8-12 an EAN-13
//! - **UpcA**: up to 11 digits, zero-padded
//! - **UpcE**: up to 7 digits, the first being the number system when 7 are given
//! - **Isbn**: 9 digit SBN, 10 character ISBN or 13 digit ISBN
//!
//! `Chk` variants expect the check digit in the input and reject a wrong one. `Cc` variants
//! reserve the composite separator rows.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub mod common;

pub use builder::{encode, EanBuilder, Module, RowHeight, Symbol};
pub use common::checksum;
pub use common::error::{EanError, EanResult, ErrorKind};
pub use common::metadata::{EncodeOptions, NumberSystem, Symbology};
pub use common::upce;
