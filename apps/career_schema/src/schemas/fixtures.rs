//! Well-formed payloads for every contract, modelled on a film-editor career.
//! Each one also satisfies `ValidationOptions::strict()`.

use serde_json::{json, Value};

pub fn recommendations() -> Value {
    json!({
        "user_personality": {
            "summary": "Creative and curious, enjoys building things people can watch and use.",
            "riasec_types": [
                {
                    "code": "A",
                    "name": "Artistic",
                    "description": "Prefers unstructured, expressive work.",
                    "strength": 5
                },
                {
                    "code": "I",
                    "name": "Investigative",
                    "description": "Likes working through problems with ideas.",
                    "strength": 3
                }
            ]
        },
        "career_paths": [
            {
                "id": "film-editor",
                "title": "Film and Video Editor",
                "onet_code": "27-4032.00",
                "short_description": "Edits moving images for film, television and online video.",
                "potential_salary": { "timeframe": "after 5 years", "amount": 68000 },
                "matching_interests": { "riasec_codes": ["A", "I"], "match_strength": 5 },
                "match_reasoning": "Strong artistic interest paired with technical curiosity."
            },
            {
                "id": "web-developer",
                "title": "Web Developer",
                "onet_code": "15-1254.00",
                "short_description": "Builds and maintains websites and web applications.",
                "potential_salary": { "timeframe": "after 3 years", "amount": 82000 },
                "matching_interests": { "riasec_codes": ["I", "C"], "match_strength": 4 },
                "match_reasoning": "Investigative streak suits debugging and building systems."
            }
        ]
    })
}

pub fn quantitative() -> Value {
    json!({
        "career_title": "Film and Video Editor",
        "onet_code": "27-4032.00",
        "demand_forecast": {
            "current_demand": 3,
            "projected_growth": [
                { "year": 2025, "demand_level": 3, "confidence": 4 },
                { "year": 2027, "demand_level": 4, "confidence": 3 },
                { "year": 2030, "demand_level": 4, "confidence": 2 }
            ],
            "outlook": "Growing",
            "reasoning": "Streaming and short-form video keep demand for editors rising."
        },
        "salary_progression": {
            "entry": { "experience": "0-2 years", "low": 40000, "median": 55000, "high": 70000 },
            "mid": { "experience": "3-5 years", "low": 55000, "median": 68000, "high": 85000 },
            "senior": { "experience": "6-10 years", "low": 70000, "median": 90000, "high": 120000 },
            "executive": { "experience": "10+ years", "low": 95000, "median": 125000, "high": 170000 }
        },
        "geographic_data": {
            "top_states": [
                { "state": "California", "average_salary": 98000, "demand_level": 5 },
                { "state": "New York", "average_salary": 91000, "demand_level": 4 }
            ],
            "national_average": 61000
        },
        "education": {
            "minimum_required": "Bachelor's degree",
            "preferred_level": "Bachelor's degree in film or broadcasting",
            "certifications": ["Adobe Certified Professional", "Avid Certified User"]
        }
    })
}

pub fn qualitative() -> Value {
    json!({
        "career_title": "Film and Video Editor",
        "onet_code": "27-4032.00",
        "summary": "Editors assemble recorded footage into a finished product.",
        "onet_data": {
            "description": "Edit moving images on film, video, or other media.",
            "tasks": [
                { "description": "Cut shot sequences to different angles at specific points in scenes." },
                { "description": "Review assembled films on screen to check for errors." }
            ],
            "knowledge": [
                { "name": "Communications and Media", "importance": 4.2, "level": 5.1 },
                { "name": "Computers and Electronics", "importance": 3.6, "level": 4.0 }
            ],
            "skills": [
                { "name": "Active Listening", "importance": 3.9, "level": 4.1 },
                { "name": "Critical Thinking", "importance": 3.8, "level": 4.0 }
            ],
            "work_context": [
                { "key": "Contact With Others", "value": "Constant contact with others" },
                { "key": "Time Pressure", "value": "Once a week or more" }
            ],
            "interests": { "primary": "Artistic", "secondary": "Enterprising" },
            "related_occupations": ["Producers and Directors", "Camera Operators"]
        },
        "work_experience": {
            "typical_day": "Reviewing dailies, assembling rough cuts and meeting with directors.",
            "work_environment": "Studios and post-production suites, often on tight deadlines.",
            "challenges": ["Long hours near delivery", "Frequent creative revisions"],
            "rewards": ["Seeing finished work on screen", "Creative ownership of pacing"],
            "testimonials": [
                {
                    "quote": "Finding the rhythm of a scene never gets old.",
                    "sentiment": "positive",
                    "theme": "creative fulfillment"
                }
            ]
        },
        "career_pathway": {
            "user_current_state": {
                "relevant_experience": ["Edited a student short film"],
                "skill_gaps": ["Color grading"],
                "strengths": ["Storytelling"],
                "readiness_score": 3
            },
            "roadmap": [
                {
                    "step": 1,
                    "title": "Learn a professional NLE",
                    "description": "Complete a structured Premiere Pro course.",
                    "timeframe": "3-6 months",
                    "priority": "high",
                    "resources": ["Adobe Premiere Pro Essentials"]
                },
                {
                    "step": 2,
                    "title": "Build a reel",
                    "description": "Cut three short pieces that show range.",
                    "timeframe": "6-12 months",
                    "priority": "medium",
                    "resources": ["Vimeo", "Local film collectives"]
                }
            ],
            "timeline": "1-2 years"
        },
        "resources": {
            "education": [
                {
                    "type": "online-course",
                    "name": "Video Editing Fundamentals",
                    "provider": "Coursera",
                    "duration": "8 weeks",
                    "cost": "$49/month",
                    "relevance": 4
                }
            ],
            "certifications": [
                {
                    "name": "Adobe Certified Professional in Video Design",
                    "provider": "Adobe",
                    "difficulty": "intermediate",
                    "time_to_complete": "3 months",
                    "industry_recognition": 4
                }
            ],
            "networking": [
                {
                    "type": "professional-org",
                    "name": "American Cinema Editors",
                    "description": "Honorary society of film editors.",
                    "cost": "Membership fee"
                }
            ],
            "job_boards": ["ProductionHUB", "Mandy"],
            "technology_skills": [
                { "name": "Adobe Premiere Pro", "tech_type": "Video creation and editing software" }
            ],
            "tools_used": [
                { "name": "Video editing workstations", "tool_type": "Computers" }
            ]
        },
        "alternative_careers": [
            {
                "title": "Multimedia Artists and Animators",
                "onet_code": "27-1014.00",
                "similarity_reason": "Shared artistic interests and software toolset.",
                "transition_difficulty": "moderate"
            },
            {
                "title": "Video Content Creator",
                "similarity_reason": "Same editing craft applied to online audiences.",
                "transition_difficulty": "easy"
            }
        ]
    })
}

pub fn qualitative_v1() -> Value {
    json!({
        "careerTitle": "Film and Video Editor",
        "onetCode": "27-4032.00",
        "summary": "Editors assemble recorded footage into a finished product.",
        "workExperience": {
            "typicalDay": "Reviewing dailies and assembling rough cuts.",
            "workEnvironment": "Post-production suites.",
            "challenges": ["Tight deadlines"],
            "rewards": ["Creative ownership"],
            "testimonials": [
                { "quote": "Deadlines are brutal.", "sentiment": "negative", "theme": "work-life balance" }
            ]
        },
        "careerPathway": {
            "userCurrentState": {
                "relevantExperience": [],
                "skillGaps": ["Sound mixing"],
                "strengths": ["Attention to detail"],
                "readinessScore": 3
            },
            "roadmap": [
                {
                    "step": 1,
                    "title": "Learn an editor",
                    "description": "Pick up DaVinci Resolve.",
                    "timeframe": "3 months",
                    "priority": "high",
                    "resources": ["Blackmagic training"]
                },
                {
                    "step": 2,
                    "title": "Assist on a production",
                    "description": "Work as an assistant editor.",
                    "timeframe": "1 year",
                    "priority": "medium",
                    "resources": []
                },
                {
                    "step": 3,
                    "title": "Cut a feature",
                    "description": "Lead the edit on an independent feature.",
                    "timeframe": "1-2 years",
                    "priority": "low",
                    "resources": ["Festival submissions"]
                }
            ],
            "timeline": "2-3 years"
        },
        "resources": {
            "education": [
                {
                    "type": "degree",
                    "name": "BFA Film Production",
                    "provider": "State University",
                    "duration": "4 years",
                    "cost": "$40,000-80,000",
                    "relevance": 5
                }
            ],
            "certifications": [
                {
                    "name": "DaVinci Resolve Certified Editor",
                    "provider": "Blackmagic Design",
                    "difficulty": "beginner",
                    "timeToComplete": "3 months",
                    "industry_recognition": 4
                }
            ],
            "networking": [
                {
                    "type": "online-community",
                    "name": "r/editors",
                    "description": "Working editors discussing the craft.",
                    "cost": "Free"
                }
            ],
            "jobBoards": ["Staff Me Up"]
        },
        "alternativeCareers": [
            {
                "title": "Producers and Directors",
                "onetCode": "27-1024.00",
                "similarityReason": "Both shape the final story.",
                "transitionDifficulty": "difficult"
            }
        ]
    })
}
