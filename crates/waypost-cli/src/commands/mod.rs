pub mod matching;
pub mod menu;
pub mod page;
pub mod routes;
