pub mod handlers;
pub mod normalize;
