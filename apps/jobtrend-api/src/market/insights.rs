//! Market-wide analysis: industries, salary bands, geography, predictions.

use axum::Json;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryGrowth {
    pub name: &'static str,
    pub growth: f64,
    pub job_count: u32,
}

#[derive(Debug, Serialize)]
pub struct MarketSkillGap {
    pub skill: &'static str,
    pub gap: f64,
    pub impact: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub overall_trend: &'static str,
    pub growth_rate: f64,
    pub total_jobs: u32,
    pub avg_salary: u64,
    pub top_industries: &'static [IndustryGrowth],
    pub skill_gaps: &'static [MarketSkillGap],
}

#[derive(Debug, Serialize)]
pub struct SalaryBands {
    pub skill: &'static str,
    pub entry: u64,
    pub mid: u64,
    pub senior: u64,
    pub lead: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMarket {
    pub city: &'static str,
    pub avg_salary: u64,
    pub job_count: u32,
    pub cost_of_living: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelMarket {
    pub level: &'static str,
    pub avg_salary: u64,
    pub job_count: u32,
    pub demand: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCombination {
    pub skills: &'static [&'static str],
    pub demand: u32,
    pub avg_salary: u64,
    pub job_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPrediction {
    pub skill: &'static str,
    pub predicted_growth: f64,
    pub timeframe: &'static str,
    pub confidence: f64,
}

pub static MARKET_ANALYSIS: MarketAnalysis = MarketAnalysis {
    overall_trend: "Growing",
    growth_rate: 8.5,
    total_jobs: 125_000,
    avg_salary: 92_000,
    top_industries: &[
        IndustryGrowth { name: "Technology", growth: 12.3, job_count: 45_000 },
        IndustryGrowth { name: "Healthcare", growth: 9.8, job_count: 32_000 },
        IndustryGrowth { name: "Finance", growth: 7.2, job_count: 28_000 },
        IndustryGrowth { name: "Education", growth: 6.5, job_count: 20_000 },
    ],
    skill_gaps: &[
        MarketSkillGap { skill: "Machine Learning", gap: 15.2, impact: "High" },
        MarketSkillGap { skill: "Cloud Architecture", gap: 12.8, impact: "High" },
        MarketSkillGap { skill: "Cybersecurity", gap: 18.5, impact: "Critical" },
        MarketSkillGap { skill: "Data Engineering", gap: 14.3, impact: "High" },
    ],
};

pub const SALARY_BANDS: &[SalaryBands] = &[
    SalaryBands { skill: "React", entry: 65_000, mid: 85_000, senior: 120_000, lead: 150_000 },
    SalaryBands { skill: "Python", entry: 70_000, mid: 90_000, senior: 125_000, lead: 160_000 },
    SalaryBands { skill: "Machine Learning", entry: 80_000, mid: 110_000, senior: 150_000, lead: 200_000 },
    SalaryBands { skill: "Node.js", entry: 60_000, mid: 82_000, senior: 115_000, lead: 145_000 },
    SalaryBands { skill: "Data Science", entry: 75_000, mid: 95_000, senior: 130_000, lead: 170_000 },
    SalaryBands { skill: "AWS", entry: 70_000, mid: 105_000, senior: 140_000, lead: 180_000 },
];

pub const CITY_MARKETS: &[CityMarket] = &[
    CityMarket { city: "San Francisco", avg_salary: 135_000, job_count: 18_500, cost_of_living: "Very High" },
    CityMarket { city: "New York", avg_salary: 125_000, job_count: 16_200, cost_of_living: "Very High" },
    CityMarket { city: "Seattle", avg_salary: 115_000, job_count: 12_800, cost_of_living: "High" },
    CityMarket { city: "Austin", avg_salary: 95_000, job_count: 9_800, cost_of_living: "Medium" },
    CityMarket { city: "Denver", avg_salary: 90_000, job_count: 8_500, cost_of_living: "Medium" },
    CityMarket { city: "Atlanta", avg_salary: 85_000, job_count: 7_200, cost_of_living: "Medium" },
];

pub const LEVEL_MARKETS: &[LevelMarket] = &[
    LevelMarket { level: "Entry Level (0-2 years)", avg_salary: 65_000, job_count: 25_000, demand: 85 },
    LevelMarket { level: "Mid Level (3-5 years)", avg_salary: 85_000, job_count: 45_000, demand: 92 },
    LevelMarket { level: "Senior Level (6-10 years)", avg_salary: 115_000, job_count: 35_000, demand: 88 },
    LevelMarket { level: "Lead/Principal (10+ years)", avg_salary: 150_000, job_count: 20_000, demand: 95 },
];

pub const SKILL_COMBINATIONS: &[SkillCombination] = &[
    SkillCombination { skills: &["React", "Node.js"], demand: 98, avg_salary: 95_000, job_count: 12_500 },
    SkillCombination { skills: &["Python", "Machine Learning"], demand: 95, avg_salary: 110_000, job_count: 8_900 },
    SkillCombination { skills: &["AWS", "Docker"], demand: 92, avg_salary: 115_000, job_count: 7_600 },
    SkillCombination { skills: &["Data Science", "SQL"], demand: 90, avg_salary: 100_000, job_count: 10_200 },
    SkillCombination { skills: &["JavaScript", "TypeScript"], demand: 88, avg_salary: 85_000, job_count: 15_800 },
];

pub const TREND_PREDICTIONS: &[TrendPrediction] = &[
    TrendPrediction { skill: "AI/ML", predicted_growth: 25.5, timeframe: "2024-2025", confidence: 0.92 },
    TrendPrediction { skill: "Cybersecurity", predicted_growth: 18.7, timeframe: "2024-2025", confidence: 0.89 },
    TrendPrediction { skill: "Cloud Computing", predicted_growth: 15.3, timeframe: "2024-2025", confidence: 0.85 },
    TrendPrediction { skill: "Data Engineering", predicted_growth: 20.1, timeframe: "2024-2025", confidence: 0.91 },
    TrendPrediction { skill: "DevOps", predicted_growth: 12.8, timeframe: "2024-2025", confidence: 0.87 },
];

/// GET /api/analysis/market
pub async fn handle_market() -> Json<ApiResponse<&'static MarketAnalysis>> {
    Json(ApiResponse::ok(&MARKET_ANALYSIS).stamped())
}

/// GET /api/analysis/salary
pub async fn handle_salary() -> Json<ApiResponse<&'static [SalaryBands]>> {
    Json(ApiResponse::ok(SALARY_BANDS).stamped())
}

/// GET /api/analysis/geographic
pub async fn handle_geographic() -> Json<ApiResponse<&'static [CityMarket]>> {
    Json(ApiResponse::ok(CITY_MARKETS).stamped())
}

/// GET /api/analysis/experience
pub async fn handle_experience() -> Json<ApiResponse<&'static [LevelMarket]>> {
    Json(ApiResponse::ok(LEVEL_MARKETS).stamped())
}

/// GET /api/analysis/skill-combinations
pub async fn handle_skill_combinations() -> Json<ApiResponse<&'static [SkillCombination]>> {
    Json(ApiResponse::ok(SKILL_COMBINATIONS).stamped())
}

/// GET /api/analysis/predictions
pub async fn handle_predictions() -> Json<ApiResponse<&'static [TrendPrediction]>> {
    Json(ApiResponse::ok(TREND_PREDICTIONS).stamped())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_bands_increase_with_level() {
        for band in SALARY_BANDS {
            assert!(band.entry < band.mid && band.mid < band.senior && band.senior < band.lead);
        }
    }

    #[test]
    fn test_prediction_confidence_is_probability() {
        assert!(TREND_PREDICTIONS
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.confidence)));
    }
}
