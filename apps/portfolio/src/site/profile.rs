//! Static profile content for the hero, about and contact sections.

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub name: &'static str,
    pub proficiency: u8, // percent
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Qualification {
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub photo: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Path of the downloadable résumé under `/static`.
    pub resume_path: &'static str,
    /// File name offered to the browser on download.
    pub resume_download_name: &'static str,
    pub skills: &'static [SkillGroup],
    pub experience: &'static [Role],
    pub education: &'static [Qualification],
}

pub static PROFILE: Profile = Profile {
    name: "Heshantha Laskshitha Abeykoon",
    headline: "Senior Front end Developer",
    tagline: "Building Intelligent Solutions | Driving Innovation & Business Growth",
    summary: "Dedicated and innovative Senior Front-End Developer with over a decade of experience in crafting engaging user interfaces and seamless user experiences. Proficient in React, Vue.js, Next.js and Angular, translating design concepts into responsive, high-performance web applications.",
    photo: "/static/Heshantha.png",
    email: "heshantha.l@gmail.com",
    phone: "+94 71 941 2688",
    location: "Remote / Sri Lanka",
    github: "https://github.com/heshantha",
    linkedin: "https://www.linkedin.com/in/uiconsultantsrilanka",
    resume_path: "/static/Heshantha%20Abeykoon.pdf",
    resume_download_name: "Heshantha_Abeykoon_CV.pdf",
    skills: &[
        SkillGroup {
            name: "Frontend Development",
            proficiency: 95,
            items: &["HTML", "CSS", "JavaScript", "TypeScript"],
        },
        SkillGroup {
            name: "Frameworks & Libraries",
            proficiency: 95,
            items: &["React.js", "Next.js", "Vue.js", "Angular", "Redux", "Zustand"],
        },
        SkillGroup {
            name: "CSS & UI Frameworks",
            proficiency: 90,
            items: &["Tailwind CSS", "Sass", "Less", "Bootstrap", "Material UI", "Shadcn UI"],
        },
        SkillGroup {
            name: "UI/UX & Design",
            proficiency: 88,
            items: &["Figma", "Adobe XD", "Photoshop", "Illustrator"],
        },
        SkillGroup {
            name: "Backend & Database",
            proficiency: 75,
            items: &["Node.js", "Express.js", "REST APIs", "GraphQL", "MongoDB", "MySQL"],
        },
        SkillGroup {
            name: "Cloud & DevOps",
            proficiency: 80,
            items: &["AWS", "firebase", "Git", "CI/CD"],
        },
    ],
    experience: &[
        Role {
            title: "Senior Front-End Developer",
            company: "APIG Pvt Ltd",
            period: "May 2025 - Present",
            highlights: &[
                "Developed and maintained responsive web applications using Next.js, Shadcn UI, TypeScript and Tailwind CSS",
                "Contributed to Apigenie product (WMS, carriers, eCommerce platform) and Wildwood inventory management system",
            ],
        },
        Role {
            title: "Senior Front-End Developer",
            company: "Talphsolutions Pvt Ltd",
            period: "Jul 2024 - May 2025",
            highlights: &[
                "Developed responsive web applications using Next.js, Material-UI, and Tailwind CSS",
                "Contributed to Medispec project (patient appointment system for UK hospital)",
            ],
        },
        Role {
            title: "Senior Front-End Developer",
            company: "Codehouse Pvt Ltd",
            period: "Jan 2024 - Jul 2024",
            highlights: &["Created and modified Sitecore components, optimized code for better performance"],
        },
        Role {
            title: "Associated Tech Lead",
            company: "Sana Commerce Pvt Ltd",
            period: "Nov 2018 - Nov 2023",
            highlights: &[
                "Led team of 3 Front-end developers, achieved 40% increase in project customizations",
                "Managed multiple B2B/B2C e-commerce project customizations for USA, Euro, and Australia regions",
            ],
        },
        Role {
            title: "Senior Front-End Developer",
            company: "EasyBooking Pvt Ltd",
            period: "Nov 2015 - Nov 2018",
            highlights: &["Lead a team responsible for web and mobile application development"],
        },
        Role {
            title: "UI Engineer",
            company: "Victory Information (Pvt) Ltd",
            period: "Mar 2013 - Oct 2014",
            highlights: &["Worked with a diverse team of developers, designers, QA engineers, and marketers"],
        },
    ],
    education: &[
        Qualification {
            title: "Bachelor of Information Technology (BIT)",
            institution: "Sri Lankan Institute of Information Technology",
            period: "2010 - 2013",
        },
        Qualification {
            title: "Web Development using PHP/MySQL",
            institution: "Sri Lanka Institute of Information Technology",
            period: "2016",
        },
        Qualification {
            title: "Diploma in Computer Studies",
            institution: "Tertiary and Vocational Education Commission of Sri Lanka",
            period: "2004",
        },
    ],
};
