use indoc::formatdoc;

use crate::infer::Message;
use crate::schema::{self, SAMPLE_SCHEMA};

pub fn system() -> Message {
    Message::new_text_system(formatdoc! {"
            You are an expert SQL query generator. Convert natural language questions into valid SQL queries.

            Context: You're working with a sample e-commerce database with these tables:

            {tables}

            Rules:
            - Generate ONLY the SQL query, no explanations
            - Use proper SQL syntax (PostgreSQL)
            - Include relevant JOINs when needed
            - Use appropriate WHERE clauses for filtering
            - Add ORDER BY and LIMIT when sensible
            - Return well-formatted, readable SQL with proper indentation
            - Always use table aliases for clarity",
        tables = schema::describe(SAMPLE_SCHEMA),
    })
}

pub fn user(query: &str) -> Message {
    Message::new_text_user(query)
}
