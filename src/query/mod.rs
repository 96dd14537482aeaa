pub mod interpreter;

pub use interpreter::{
    classify, extract_count, interpret, Intent, QueryInterpreter, QueryResult, QUERY_EXAMPLES,
    QUERY_HINT,
};
