pub mod json_api;

pub use json_api::{
    evaluate_request, evaluate_scores_json, evaluate_scores_json_with, list_formats_json,
    list_formats_json_with, request_schema_json, EvaluateRequest, EvaluateResponse, FormatsResponse,
};
