pub mod ecies;
