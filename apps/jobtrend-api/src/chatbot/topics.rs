//! Keyword routing for the career assistant chatbot.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greetings,
    ResumeHelp,
    JobMatching,
    SkillSuggestions,
    MarketInsights,
    ProgressTracking,
    GeneralHelp,
}

/// Tested in order against the lower-cased message; first hit wins.
const ROUTES: &[(Topic, &[&str])] = &[
    (Topic::Greetings, &["hello", "hi", "hey"]),
    (Topic::ResumeHelp, &["upload", "resume"]),
    (Topic::JobMatching, &["job", "match", "find"]),
    (Topic::SkillSuggestions, &["skill", "suggestion"]),
    (Topic::MarketInsights, &["market", "trend"]),
    (Topic::ProgressTracking, &["progress", "track"]),
    (Topic::GeneralHelp, &["help"]),
];

pub fn classify_message(message: &str) -> Topic {
    let lower = message.to_lowercase();
    ROUTES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::GeneralHelp)
}

impl Topic {
    pub fn responses(&self) -> &'static [&'static str] {
        match self {
            Topic::Greetings => &[
                "Hello! I'm your AI career assistant. How can I help you today?",
                "Hi there! I'm here to help with your career development. What would you like to know?",
                "Welcome! I can assist you with resume analysis, job matching, and skill development.",
            ],
            Topic::ResumeHelp => &[
                "To upload your resume:\n1. Go to the 'Resume Upload' page\n2. Click 'Choose File' and select your PDF resume\n3. Click 'Upload & Analyze'\n4. Wait for the analysis to complete\n\nYour resume will be analyzed for skills, experience level, and job matches. The results will be available across all tabs!",
                "Uploading a resume is easy! Just visit the Resume Upload page, select your PDF file, and click analyze. The system will extract your skills and match you with relevant jobs.",
            ],
            Topic::JobMatching => &[
                "To find matching jobs:\n1. Upload your resume first (if not done already)\n2. Go to the 'Job Matching' page\n3. View personalized job recommendations based on your skills\n4. Use filters to narrow down results\n5. Click 'Apply' to go to the job application page\n\nJobs are ranked by match score - higher scores mean better fits!",
                "Job matching works best when you upload your resume first. The system analyzes your skills and experience to find the most relevant opportunities for you.",
            ],
            Topic::SkillSuggestions => &[
                "For skill suggestions:\n1. Upload your resume to get personalized recommendations\n2. Go to 'Skill Suggestions' page\n3. View skill gaps and upgrade recommendations\n4. Track your progress for each skill using the progress bars\n5. Add new skills to track manually\n6. Click learning platform links to start learning\n\nFocus on high-priority skills first for maximum impact!",
                "Skill suggestions are personalized based on your resume analysis. You can track your progress and find learning resources for each recommended skill.",
            ],
            Topic::MarketInsights => &[
                "To view market insights:\n1. Go to 'Market Insights' page\n2. View general market trends and salary data\n3. If you've uploaded a resume, see personalized market demand for your skills\n4. Check which skills are in high demand\n5. Use this data to prioritize your skill development\n\nMarket insights help you make informed career decisions!",
                "Market insights show you current industry trends, salary data, and demand for specific skills. This helps you make informed decisions about your career development.",
            ],
            Topic::ProgressTracking => &[
                "To track skill progress:\n1. Go to 'Skill Suggestions' page\n2. Find the 'Skill Progress Tracking' section\n3. Use + and - buttons to update your progress\n4. Add new skills to track using the input field\n5. Progress is automatically saved and persists across sessions\n6. Completed skills show a green checkmark\n\nTrack your progress to stay motivated and see your growth!",
                "Progress tracking helps you stay motivated and see your skill development over time. You can manually update your progress and add new skills to track.",
            ],
            Topic::GeneralHelp => &[
                "I can help you with:\n\n📄 **Resume Analysis**: Upload and analyze your resume for skills and experience\n💼 **Job Matching**: Find jobs that match your profile\n🎯 **Skill Suggestions**: Get personalized skill recommendations\n📊 **Market Insights**: View industry trends and demand\n📈 **Progress Tracking**: Monitor your skill development\n\nTry asking about any of these features or use the quick reply buttons below!",
                "I'm your AI career assistant! I can help with resume analysis, job matching, skill suggestions, market insights, and progress tracking. What would you like to know?",
            ],
        }
    }
}

/// Picks a canned reply. The choice depends only on the message, so the same
/// question always gets the same answer.
pub fn reply_for(message: &str) -> (Topic, &'static str) {
    let topic = classify_message(message);
    let responses = topic.responses();
    let index = message.chars().count() % responses.len();
    (topic, responses[index])
}
