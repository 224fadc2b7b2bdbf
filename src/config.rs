#[cfg(feature = "backend")]
pub mod back_shared;

pub fn validate() {
    #[cfg(feature = "backend")]
    back_shared::validate();

    #[cfg(feature = "infer")]
    crate::infer::config::validate();
}
