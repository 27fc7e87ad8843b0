//! The fixed set of UI string keys.
//!
//! Every built-in catalog defines every key in [`ALL`]; the resolver
//! tolerates a missing key via the fallback chain, but the shipped data
//! is never partial.

pub const APP_WELCOME: &str = "app.welcome";
pub const APP_TAGLINE: &str = "app.tagline";

pub const SEARCH_TITLE: &str = "search.title";
pub const SEARCH_PLACEHOLDER: &str = "search.placeholder";
pub const SEARCH_EMPTY: &str = "search.empty";

pub const TERM_MEANING: &str = "term.meaning";
pub const TERM_EXAMPLES: &str = "term.examples";
pub const TERM_TAGS: &str = "term.tags";
pub const TERM_SIMILAR: &str = "term.similar";
pub const TERM_VOTES: &str = "term.votes";
pub const TERM_ORIGIN: &str = "term.origin";
pub const TERM_PART_OF_SPEECH: &str = "term.part_of_speech";

pub const SUBMIT_TITLE: &str = "submit.title";
pub const SUBMIT_SUCCESS: &str = "submit.success";

pub const LIST_TRENDING: &str = "list.trending";
pub const LIST_POPULAR: &str = "list.popular";
pub const LIST_ALL: &str = "list.all";

pub const ERROR_NETWORK: &str = "error.network";
pub const ERROR_SERVER: &str = "error.server";
pub const ERROR_REQUIRED: &str = "error.required";

pub const HEALTH_OK: &str = "health.ok";
pub const HEALTH_DOWN: &str = "health.down";

pub const COMMON_LOADING: &str = "common.loading";
pub const COMMON_RETRY: &str = "common.retry";

/// Every key, for catalog-completeness checks.
pub const ALL: &[&str] = &[
    APP_WELCOME,
    APP_TAGLINE,
    SEARCH_TITLE,
    SEARCH_PLACEHOLDER,
    SEARCH_EMPTY,
    TERM_MEANING,
    TERM_EXAMPLES,
    TERM_TAGS,
    TERM_SIMILAR,
    TERM_VOTES,
    TERM_ORIGIN,
    TERM_PART_OF_SPEECH,
    SUBMIT_TITLE,
    SUBMIT_SUCCESS,
    LIST_TRENDING,
    LIST_POPULAR,
    LIST_ALL,
    ERROR_NETWORK,
    ERROR_SERVER,
    ERROR_REQUIRED,
    HEALTH_OK,
    HEALTH_DOWN,
    COMMON_LOADING,
    COMMON_RETRY,
];
