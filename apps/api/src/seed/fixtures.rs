//! Fixture catalogs for the seed generator: job templates, candidate name
//! pools, profile text keyed by primary tag, and assessment template packs.

use crate::models::assessment::QuestionType;

pub const FIRST_NAMES: &[&str] = &[
    "Aisha", "Ben", "Chloe", "David", "Eva", "Frank", "Grace", "Henry", "Isla", "Jack",
    "Kara", "Leo", "Mia", "Noah", "Olivia", "Paul", "Quinn", "Ruby", "Sam", "Tara",
    "Umar", "Violet", "Will", "Xena", "Yara", "Zayn", "Liam", "Emma", "Sophia", "James",
    "Lucas", "Ava", "Mason", "Zoe", "Ethan", "Lily", "Elijah", "Hannah", "Logan", "Nora",
];

pub const LAST_NAMES: &[&str] = &[
    "Khan", "Smith", "Chen", "Williams", "Garcia", "Jones", "Rodriguez", "Lee", "Patel",
    "Brown", "Miller", "Davis", "Wilson", "Taylor", "Clark", "Hall", "Allen", "Young",
    "Walker", "Scott", "Adams", "Baker", "Carter", "Evans", "Green", "Hill", "Jackson",
    "King", "Lewis", "Martin", "Moore", "Nelson", "Parker", "Roberts", "Turner", "White",
    "Harris", "Thompson", "Wright", "Cooper",
];

pub struct JobTemplate {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
}

pub const JOB_CATALOG: &[JobTemplate] = &[
    JobTemplate {
        title: "Senior Frontend Engineer (React)",
        tags: &["frontend", "react"],
        summary: "Lead our frontend team building next-generation user interfaces with React and TypeScript, owning architecture and mentoring junior developers.",
    },
    JobTemplate {
        title: "Lead Backend Developer (Node.js)",
        tags: &["backend", "nodejs"],
        summary: "Design and implement robust, scalable backend services with a microservices architecture; deep database and API security knowledge essential.",
    },
    JobTemplate {
        title: "UX/UI Designer",
        tags: &["design"],
        summary: "Create intuitive, elegant user experiences from research and wireframes through high-fidelity mockups; strong portfolio required.",
    },
    JobTemplate {
        title: "Senior Product Manager",
        tags: &["management", "product"],
        summary: "Own the roadmap for our core platform, writing detailed specifications and working closely with engineering and design.",
    },
    JobTemplate {
        title: "DevOps Specialist (Kubernetes)",
        tags: &["devops", "cloud"],
        summary: "Automate our CI/CD pipeline and manage containerized infrastructure on Kubernetes; Docker, Helm, and Terraform experience valued.",
    },
    JobTemplate {
        title: "QA Automation Engineer (Cypress)",
        tags: &["qa"],
        summary: "Develop a comprehensive automated testing strategy, writing end-to-end tests and championing quality across the engineering org.",
    },
    JobTemplate {
        title: "Junior Full Stack Developer",
        tags: &["frontend", "backend"],
        summary: "Contribute across a modern React, Node.js, and PostgreSQL stack; a great opportunity to learn and grow.",
    },
    JobTemplate {
        title: "Lead Data Scientist (Python/ML)",
        tags: &["data"],
        summary: "Analyze large datasets and build predictive models driving key business decisions; strong Python, SQL, and ML library skills required.",
    },
    JobTemplate {
        title: "Engineering Manager",
        tags: &["management"],
        summary: "Lead, mentor, and grow a team of software engineers, ensuring timely delivery and a collaborative team culture.",
    },
    JobTemplate {
        title: "Cloud Infrastructure Engineer",
        tags: &["cloud", "devops"],
        summary: "Architect and manage secure, scalable, cost-effective cloud environments with infrastructure-as-code practices.",
    },
    JobTemplate {
        title: "Mobile Developer (React Native)",
        tags: &["mobile", "frontend"],
        summary: "Develop and maintain our cross-platform mobile application, delivering a consistent experience on iOS and Android.",
    },
    JobTemplate {
        title: "Technical Project Manager",
        tags: &["management"],
        summary: "Coordinate complex cross-functional technical projects from inception to completion with strong stakeholder communication.",
    },
    JobTemplate {
        title: "Information Security Engineer",
        tags: &["security"],
        summary: "Protect systems and customer data by designing security controls, performing vulnerability assessments, and responding to incidents.",
    },
    JobTemplate {
        title: "Senior Backend Engineer (Go)",
        tags: &["backend", "golang"],
        summary: "Build critical high-performance services in Go; gRPC and distributed-systems experience is a major plus.",
    },
    JobTemplate {
        title: "Mid-Level Frontend Developer (Vue.js)",
        tags: &["frontend", "vuejs"],
        summary: "Build and maintain our customer-facing dashboard with a strong grasp of modern JavaScript and component-based architecture.",
    },
    JobTemplate {
        title: "Principal Product Designer",
        tags: &["design", "management"],
        summary: "Set the vision for user experience company-wide, leading major design initiatives and mentoring other designers.",
    },
    JobTemplate {
        title: "Senior Site Reliability Engineer (SRE)",
        tags: &["devops", "cloud"],
        summary: "Own monitoring, SLOs, and incident management, building automation to eliminate toil and keep the platform reliable.",
    },
    JobTemplate {
        title: "Database Administrator (PostgreSQL)",
        tags: &["backend", "data"],
        summary: "Manage and optimize mission-critical PostgreSQL clusters: performance tuning, backup and recovery, schema management.",
    },
    JobTemplate {
        title: "Android Developer (Kotlin)",
        tags: &["mobile", "android"],
        summary: "Build our native Android application with Kotlin and the latest Jetpack libraries; passion for mobile UX is a must.",
    },
    JobTemplate {
        title: "Data Engineer (Spark/ETL)",
        tags: &["data"],
        summary: "Design and maintain data pipelines and ETL processes, keeping data clean, reliable, and available for the data science team.",
    },
    JobTemplate {
        title: "Solutions Architect",
        tags: &["cloud", "management"],
        summary: "Design and implement platform solutions with enterprise customers; strong technical background and client-facing skills required.",
    },
    JobTemplate {
        title: "UX Researcher",
        tags: &["design"],
        summary: "Conduct qualitative and quantitative research into user behaviors and needs, directly shaping the product's future.",
    },
    JobTemplate {
        title: "Technical Writer",
        tags: &["documentation"],
        summary: "Create clear, comprehensive documentation for our developer APIs and user-facing products.",
    },
    JobTemplate {
        title: "Lead QA Engineer",
        tags: &["qa", "management"],
        summary: "Lead the QA team and define our testing strategy as the ultimate gatekeeper for product quality.",
    },
    JobTemplate {
        title: "IT Support Specialist",
        tags: &["it"],
        summary: "Provide internal IT support: onboarding, hardware and software management, and network troubleshooting.",
    },
    JobTemplate {
        title: "Digital Marketing Manager",
        tags: &["marketing"],
        summary: "Develop and execute digital marketing campaigns across SEO, SEM, and social media with a data-driven mindset.",
    },
    JobTemplate {
        title: "Content Marketing Strategist",
        tags: &["marketing", "documentation"],
        summary: "Create compelling blog posts, white papers, and case studies to attract and engage our target audience.",
    },
    JobTemplate {
        title: "Senior Security Analyst",
        tags: &["security"],
        summary: "Analyze and respond to security alerts, conduct threat hunting, and help mature our security operations center.",
    },
    JobTemplate {
        title: "Machine Learning Engineer",
        tags: &["data"],
        summary: "Design, build, and deploy machine learning models into production, from recommendation engines to fraud detection.",
    },
    JobTemplate {
        title: "Agile Coach / Scrum Master",
        tags: &["management"],
        summary: "Guide engineering teams in Agile best practices, facilitating ceremonies and removing impediments.",
    },
];

pub struct ProfilePool {
    pub tag: &'static str,
    pub profiles: &'static [&'static str],
}

pub const PROFILE_POOLS: &[ProfilePool] = &[
    ProfilePool {
        tag: "frontend",
        profiles: &[
            "Experienced React developer with 5+ years building complex, scalable frontend applications and a passion for clean component architecture.",
            "A Vue.js enthusiast with a strong eye for UI/UX details and a track record of delivering pixel-perfect, responsive interfaces.",
            "Junior frontend developer with a solid foundation in HTML, CSS, and modern TypeScript, eager to contribute to a fast-paced team.",
            "Frontend specialist focused on performance optimization, reducing load times for large-scale applications.",
        ],
    },
    ProfilePool {
        tag: "backend",
        profiles: &[
            "Senior backend engineer with over 8 years of expertise in building highly available distributed systems.",
            "Full-stack engineer with a strong backend focus, skilled in deploying scalable microservices with Docker and Kubernetes.",
            "Mid-level developer with 3 years of Python experience and a passion for clean, well-documented RESTful APIs.",
            "A pragmatic Java developer focused on reliable, maintainable enterprise-grade code.",
        ],
    },
    ProfilePool {
        tag: "design",
        profiles: &[
            "Creative and empathetic UX/UI designer skilled in Figma, user research, and usability testing.",
            "Lead product designer with a stunning portfolio, expert at bridging user needs and business goals.",
            "Visual designer with a passion for branding and building consistent, accessible design systems.",
        ],
    },
    ProfilePool {
        tag: "qa",
        profiles: &[
            "Detail-oriented QA professional improving product quality through robust automation; loves finding edge cases.",
            "Senior QA analyst with deep experience in manual, exploratory, and performance testing at enterprise scale.",
            "QA automation engineer who has set up comprehensive testing frameworks from scratch in CI/CD environments.",
        ],
    },
    ProfilePool {
        tag: "devops",
        profiles: &[
            "Certified AWS DevOps engineer with extensive experience building resilient, automated CI/CD pipelines.",
            "Senior SRE focused on observability, automation, and leading blameless post-mortems.",
            "Cloud infrastructure specialist architecting secure, cost-effective, highly available environments.",
        ],
    },
    ProfilePool {
        tag: "management",
        profiles: &[
            "Data-driven product leader with a track record of launching and scaling successful B2B SaaS products.",
            "Empathetic engineering manager focused on psychological safety, career growth, and successful delivery.",
            "Seasoned technical project manager skilled in managing Agile teams and complex timelines.",
        ],
    },
    ProfilePool {
        tag: "mobile",
        profiles: &[
            "Skilled native iOS developer with 4 years of experience building performant applications in Swift.",
            "Cross-platform mobile engineer shipping applications for both iOS and Android with React Native.",
        ],
    },
    ProfilePool {
        tag: "data",
        profiles: &[
            "A data scientist with a PhD in Statistics and extensive experience deploying machine learning models.",
            "Insightful data analyst who turns complex raw datasets into clear, actionable dashboards and reports.",
        ],
    },
    ProfilePool {
        tag: "cloud",
        profiles: &[
            "Multi-cloud specialist with professional certifications in both AWS and GCP.",
            "Infrastructure engineer who lives and breathes infrastructure-as-code, with deep Terraform expertise.",
        ],
    },
    ProfilePool {
        tag: "security",
        profiles: &[
            "Application security expert focused on threat modeling, code scanning, and penetration testing.",
            "A cybersecurity analyst skilled in incident response, forensics, and cloud-native threat monitoring.",
        ],
    },
];

pub const GENERIC_PROFILE: &str = "Generalist with experience in multiple areas.";

/// A question in a template pack. `condition` references a prior question in
/// the same pack by its label; the seed resolves it to a generated id.
pub struct QuestionTemplate {
    pub label: &'static str,
    pub kind: QuestionType,
    pub required: bool,
    pub options: &'static [&'static str],
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub condition: Option<(&'static str, &'static str)>,
}

pub struct SectionTemplate {
    pub title: &'static str,
    pub questions: &'static [QuestionTemplate],
}

pub struct AssessmentTemplate {
    pub title: &'static str,
    pub sections: &'static [SectionTemplate],
}

const NO_OPTIONS: &[&str] = &[];

const fn question(
    label: &'static str,
    kind: QuestionType,
    required: bool,
) -> QuestionTemplate {
    QuestionTemplate {
        label,
        kind,
        required,
        options: NO_OPTIONS,
        min: None,
        max: None,
        condition: None,
    }
}

pub const ASSESSMENT_TEMPLATES: &[AssessmentTemplate] = &[
    AssessmentTemplate {
        title: "Frontend Skills Assessment",
        sections: &[
            SectionTemplate {
                title: "Experience & Background",
                questions: &[
                    QuestionTemplate {
                        min: Some(0),
                        max: Some(25),
                        ..question(
                            "How many years of professional frontend experience do you have?",
                            QuestionType::Numeric,
                            true,
                        )
                    },
                    QuestionTemplate {
                        options: &["Employed", "Unemployed", "Freelancing", "Student"],
                        ..question(
                            "What is your current employment status?",
                            QuestionType::SingleChoice,
                            true,
                        )
                    },
                    QuestionTemplate {
                        options: &["Yes", "No"],
                        ..question(
                            "Are you comfortable with TypeScript?",
                            QuestionType::SingleChoice,
                            true,
                        )
                    },
                    QuestionTemplate {
                        min: Some(1),
                        max: Some(5),
                        condition: Some(("Are you comfortable with TypeScript?", "Yes")),
                        ..question(
                            "If yes, rate your TypeScript proficiency from 1 to 5.",
                            QuestionType::Numeric,
                            false,
                        )
                    },
                ],
            },
            SectionTemplate {
                title: "Core Concepts",
                questions: &[
                    question(
                        "What are the key differences between controlled and uncontrolled components?",
                        QuestionType::LongText,
                        true,
                    ),
                    QuestionTemplate {
                        options: &["React.memo", "useMemo", "useCallback", "Virtual DOM diffing"],
                        ..question(
                            "Which of the following are valid ways to optimize rendering performance?",
                            QuestionType::MultiChoice,
                            true,
                        )
                    },
                    question(
                        "Please provide a link to your portfolio or GitHub profile.",
                        QuestionType::ShortText,
                        false,
                    ),
                ],
            },
        ],
    },
    AssessmentTemplate {
        title: "Design Skills & Process Review",
        sections: &[
            SectionTemplate {
                title: "Background",
                questions: &[
                    QuestionTemplate {
                        min: Some(0),
                        max: Some(30),
                        ..question(
                            "How many years of professional design experience do you have?",
                            QuestionType::Numeric,
                            true,
                        )
                    },
                    QuestionTemplate {
                        options: &["Figma", "Sketch", "Adobe XD", "Framer"],
                        ..question(
                            "Which design tools are you proficient in?",
                            QuestionType::MultiChoice,
                            true,
                        )
                    },
                    QuestionTemplate {
                        options: &["Yes", "No"],
                        ..question(
                            "Do you have experience with design systems?",
                            QuestionType::SingleChoice,
                            true,
                        )
                    },
                    QuestionTemplate {
                        condition: Some(("Do you have experience with design systems?", "Yes")),
                        ..question(
                            "If yes, describe a design system you created or contributed to.",
                            QuestionType::LongText,
                            false,
                        )
                    },
                ],
            },
            SectionTemplate {
                title: "Process & Portfolio",
                questions: &[
                    question(
                        "Briefly describe your approach to user research.",
                        QuestionType::LongText,
                        true,
                    ),
                    question(
                        "Please provide a link to your portfolio.",
                        QuestionType::ShortText,
                        true,
                    ),
                    question(
                        "Upload a recent case study.",
                        QuestionType::File,
                        false,
                    ),
                ],
            },
        ],
    },
    AssessmentTemplate {
        title: "Backend & System Design Challenge",
        sections: &[
            SectionTemplate {
                title: "Experience",
                questions: &[
                    QuestionTemplate {
                        min: Some(0),
                        max: Some(25),
                        ..question(
                            "How many years of professional backend experience do you have?",
                            QuestionType::Numeric,
                            true,
                        )
                    },
                    QuestionTemplate {
                        options: &["1-5 engineers", "6-20 engineers", "21-50 engineers", "50+ engineers"],
                        ..question(
                            "What size engineering teams have you worked with?",
                            QuestionType::SingleChoice,
                            true,
                        )
                    },
                ],
            },
            SectionTemplate {
                title: "Architecture",
                questions: &[
                    QuestionTemplate {
                        options: &["Yes", "No"],
                        ..question(
                            "Have you worked with microservices architecture?",
                            QuestionType::SingleChoice,
                            true,
                        )
                    },
                    QuestionTemplate {
                        condition: Some(("Have you worked with microservices architecture?", "Yes")),
                        ..question(
                            "If yes, describe a challenge you faced with inter-service communication.",
                            QuestionType::LongText,
                            false,
                        )
                    },
                    QuestionTemplate {
                        options: &["PostgreSQL", "MySQL", "MongoDB", "Redis", "Cassandra"],
                        ..question(
                            "Which databases have you worked with in production?",
                            QuestionType::MultiChoice,
                            true,
                        )
                    },
                    question(
                        "How do you approach database optimization and query performance?",
                        QuestionType::LongText,
                        true,
                    ),
                ],
            },
        ],
    },
];
