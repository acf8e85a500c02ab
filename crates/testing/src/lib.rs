//! Testing utilities for the hate speech scorer
//!
//! This crate provides:
//! - `TsvFixture` for writing gold and prediction files to a throwaway directory
//! - Builders for label sets held in memory
//! - Random label generators
//!
//! # Examples
//!
//! ```
//! use hate_scorer_domain::Subtask;
//! use hate_scorer_testing::{LabelSetBuilder, TsvFixture};
//!
//! let gold = LabelSetBuilder::new(Subtask::HateType)
//!     .with_single("1", "Abusive")
//!     .with_single("2", "None")
//!     .build();
//!
//! let fixture = TsvFixture::new().unwrap();
//! let gold_path = fixture.write_gold("gold_subtask_1A.tsv", &gold).unwrap();
//! assert!(gold_path.exists());
//! ```

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;

pub use fake;
pub use proptest;
