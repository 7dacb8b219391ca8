mod lines;

pub use lines::count_lines;
