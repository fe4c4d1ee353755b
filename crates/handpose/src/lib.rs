#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use handpose_geometry as geometry;

#[doc(inline)]
pub use handpose_io as io;
