pub mod aabb;
pub mod linalg;
pub mod quadratic;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use linalg::{solve_dense, CyclicTridiagonal, Tridiagonal};
pub use quadratic::{Quadratic, QuadraticBasis};

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
