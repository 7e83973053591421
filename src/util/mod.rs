pub mod block;
pub mod fresh;
pub mod id;
pub mod variable_map;
