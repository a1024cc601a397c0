pub mod tensor_dataset;
pub mod traits;
pub mod vec_dataset;

pub use tensor_dataset::TensorDataset;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
