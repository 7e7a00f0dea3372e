//! A tagged success-or-failure container with checked access.
//!
//! [`Expected<T, E>`] holds exactly one of a success value or a failure value.
//! Failures are ordinary data; asking the container for the slot it does not
//! hold is a bug and panics loudly instead of handing back garbage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  error.rs   │────▶│ expected.rs  │◀────│  variant.rs  │
//! │(AccessError)│     │ (Expected)   │     │ (try_extract,│
//! └─────────────┘     └──────────────┘     │  variant!)   │
//!                            │             └──────────────┘
//!                            ▼
//!                    ┌──────────────┐
//!                    │ contracts.rs │
//!                    │ (debug-only  │
//!                    │  invariants) │
//!                    └──────────────┘
//! ```
//!
//! # Invariants
//!
//! | Property        | Where it is enforced                                  |
//! |-----------------|-------------------------------------------------------|
//! | one live slot   | private enum storage in `expected.rs`                 |
//! | checked access  | `value`/`error` panic, `try_value`/`try_error` return |
//! | copy fidelity   | `Clone` + `contracts::check_clone_fidelity`           |
//! | swap exchange   | `Expected::swap` + `contracts::check_swap_exchanged`  |
//!
//! # Usage
//!
//! ```
//! use expected::{try_extract, variant, Expected};
//!
//! variant! {
//!     enum Number {
//!         Int(i32),
//!         Double(f64),
//!     }
//! }
//!
//! let parsed: Expected<f64, String> = Expected::success(1.0);
//! if parsed.is_success() {
//!     assert_eq!(*parsed.value(), 1.0);
//! }
//!
//! let got = try_extract::<f64, _>(&Number::Int(1));
//! assert_eq!(got.error(), "variant doesn't contain the desired type");
//! ```

// Module declarations
pub mod contracts;
mod error;
mod expected;
pub mod testing;
mod variant;

// Re-exports for public API
pub use error::AccessError;
pub use expected::Expected;
pub use variant::{try_extract, Alternative, Visit, MISSING_ALTERNATIVE};
