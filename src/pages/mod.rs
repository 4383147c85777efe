pub mod activity_board;

pub use activity_board::ActivityBoard;
