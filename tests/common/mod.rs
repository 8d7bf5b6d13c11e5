pub mod temp;

pub use temp::AppFixture;
