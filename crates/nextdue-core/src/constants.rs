/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const NEXTDATE_ROUTE_COMPONENT: &str = "nextdate";
pub const NEXTDATE_ROUTE: &str = const_str::concat!(API_ROUTE_PREFIX, "/", NEXTDATE_ROUTE_COMPONENT);

pub const SIGNIN_ROUTE_COMPONENT: &str = "signin";
pub const SIGNIN_ROUTE: &str = const_str::concat!(API_ROUTE_PREFIX, "/", SIGNIN_ROUTE_COMPONENT);

pub const TASK_ROUTE_COMPONENT: &str = "task";
pub const TASK_ROUTE: &str = const_str::concat!(API_ROUTE_PREFIX, "/", TASK_ROUTE_COMPONENT);

pub const TASKS_ROUTE_COMPONENT: &str = "tasks";
pub const TASKS_ROUTE: &str = const_str::concat!(API_ROUTE_PREFIX, "/", TASKS_ROUTE_COMPONENT);

pub const TASK_DONE_ROUTE_COMPONENT: &str = "done";
pub const TASK_DONE_ROUTE: &str = const_str::concat!(TASK_ROUTE, "/", TASK_DONE_ROUTE_COMPONENT);

/// Name of the cookie carrying the sign-in token.
pub const TOKEN_COOKIE: &str = "token";
