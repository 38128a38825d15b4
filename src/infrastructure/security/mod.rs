pub mod profanity_filter;
