//! Direction offsets in the 10x12 mailbox. Stepping by any of these from a
//! playing square lands on another playing square or on the sentinel border.

pub static N_DIRS: [i8; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
pub static B_DIR: [i8; 4] = [-11, -9, 9, 11];
pub static R_DIR: [i8; 4] = [-10, -1, 1, 10];
pub static Q_DIR: [i8; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];
pub static K_DIRS: [i8; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];
