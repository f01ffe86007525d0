mod filiaal;

pub use self::filiaal::*;
