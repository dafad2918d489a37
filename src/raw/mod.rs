mod node;
mod size;

pub(crate) use node::Node;
