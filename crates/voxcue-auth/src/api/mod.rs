mod login_api_request;
mod login_api_response;

pub(crate) use login_api_request::LoginApiRequest;
pub(crate) use login_api_response::LoginApiResponse;
