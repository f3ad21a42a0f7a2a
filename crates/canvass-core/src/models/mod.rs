pub mod answer;
pub mod part;
pub mod rating_scale;
pub mod scoring;
