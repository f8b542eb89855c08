mod instruction;
mod transcript;
mod turn;
mod upstream;

pub use instruction::*;
pub use transcript::*;
pub use turn::*;
pub use upstream::*;
