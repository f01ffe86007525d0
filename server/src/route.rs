pub(crate) mod filiaal;

pub use self::filiaal::*;
