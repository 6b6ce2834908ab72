//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod quota;
pub use self::quota::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::Timer;
