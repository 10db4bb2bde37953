//! Structural elements module

mod element;
mod node;
mod section;

pub use element::{Element, ElementId};
pub use node::{Dof, Node, NodeId};
pub use section::Section;
