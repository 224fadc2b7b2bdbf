use text2sql_macro::dto;

#[dto(convert, clone, eq, request)]
pub struct ConvertRequest {
    pub query: String,
}

#[dto(convert, clone, eq, response)]
pub struct ConvertResponse {
    pub sql: String,
}
