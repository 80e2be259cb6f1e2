pub mod kiosk;
pub mod product;

pub use kiosk::UpdateKioskRequest;
pub use product::UpdateProductRequest;
