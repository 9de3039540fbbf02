use crate::error::{error_template, error_unit};

error_template!(ApiClientError, IntoApiClientError);
error_unit!(EmptyTokenError);
