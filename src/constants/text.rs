pub const TITLE_TEXT: &str = "*** Merry Christmas Tree ***";
pub const FOOTER_TEXT: &str = "Snow falling ~ Press Ctrl+C to exit";
pub const INTRO_TEXT: &str = "Starting the Christmas tree animation...";
pub const FAREWELL_TEXT: &str = "*** Merry Christmas! Happy Holidays! ***";
