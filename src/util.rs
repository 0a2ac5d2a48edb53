mod ascii_table;

pub use self::ascii_table::AsciiTable;
