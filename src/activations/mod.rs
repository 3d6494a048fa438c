// catch invalid configurations that would only lead to more opaque errors later on.
// The backends are an enum expressed as features, so only one may be on at a time.
#[cfg(all(feature = "std", feature = "libm"))] compile_error!("`std` feature is enabled with `libm`. These are mutually exclusive, pick one.");
#[cfg(all(
  not(feature = "std"),
  not(feature = "libm")
))] compile_error!("You must select a backend by enabling one of the following features: { std, libm }.");

// if we have the `std` feature (default present)
#[cfg(feature = "std")]  mod std_impl;
#[cfg(feature = "std")]  pub use std_impl::*;

// if we have the `libm` feature (default absent, for targets without std math)
#[cfg(feature = "libm")] mod libm_impl;
#[cfg(feature = "libm")] pub use libm_impl::*;

/// Name of the math backend the crate was compiled against.
#[cfg(feature = "std")]  pub const BACKEND: &str = "std";
#[cfg(feature = "libm")] pub const BACKEND: &str = "libm";
