// Static market data: trends, listings, skills catalog, learning plans.
// Tables are compile-time constants; handlers serialize them as-is.

pub mod insights;
pub mod jobs;
pub mod skills;
pub mod suggestions;
