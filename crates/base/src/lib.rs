pub mod logging;
pub use logging::*;

mod tensor;
pub use tensor::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;
