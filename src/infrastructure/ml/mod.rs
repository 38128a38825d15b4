pub mod count_vectorizer;
pub mod linear_classifier;
pub mod logistic_regression;
pub mod traits;
pub mod training;
