//! Pipe editor buffers through external code formatters.
//!
//! `formatrelay` picks a formatter for the buffer's language (clang-format,
//! prettier, autopep8, rustfmt or gn), finds its executable, builds a
//! tool-specific command line and returns whatever the tool prints. It does no
//! formatting of its own.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use formatrelay::{Dispatcher, FormatRequest, SearchPath, config};
//!
//! let file = Path::new("/work/proj/src/main.c");
//! let (cfg, _) = config::load(None, Path::new("/work/proj/src")).unwrap();
//! let dispatcher = Dispatcher::new(cfg, SearchPath::from_env());
//!
//! let request = FormatRequest::new(file, "int  main( ){}\n");
//! if let Some(formatted) = dispatcher.format(&request).unwrap() {
//!     print!("{formatted}");
//! }
//! ```

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod external_formatters;
pub mod formatter;
pub mod on_save;
pub mod resolver;
pub mod syntax;
pub mod utils;

pub use command::Selection;
pub use config::Config;
pub use dispatch::{Dispatcher, FormatRequest};
pub use error::FormatError;
pub use formatter::{Formatter, formatter_type};
pub use resolver::{SearchPath, find_binary};
