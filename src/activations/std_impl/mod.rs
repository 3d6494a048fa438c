mod f64;
pub use self::f64::*;
