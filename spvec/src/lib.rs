#[cfg(feature = "core")]
#[doc(inline)]
pub use spvec_core as core;

#[cfg(feature = "scoring")]
#[doc(inline)]
pub use spvec_scoring as scoring;
