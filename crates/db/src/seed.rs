//! Default portfolio written to `projects.json` on first start.

use crate::models::project::Project;
use crate::models::status::ProjectStatus;

struct SeedProject {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    image: &'static str,
    github: &'static str,
    live: &'static str,
    technologies: &'static [&'static str],
    status: ProjectStatus,
}

const STANDARD_STACK: &[&str] = &["Vite", "TypeScript", "Tailwind CSS", "Figma", "SEO"];

const SEED: &[SeedProject] = &[
    SeedProject {
        title: "Legacy54",
        category: "Web Development & SEO Specialist",
        description: "Legacy54 Sports is a startup brand expanding across Africa that needed a strong \
            digital footprint. A modern website was designed and built from scratch with a focus on \
            speed, responsiveness, and navigation, alongside an SEO strategy that improved visibility \
            by about fifty percent and Google Analytics integration for real-time insight.",
        image: "/images/lega.jpg",
        github: "https://github.com/samuelikhifa/legae.git",
        live: "https://www.legacy54.com/",
        technologies: &["Vite", "Figma", "TypeScript", "Tailwind CSS", "Google Analytics", "SEO"],
        status: ProjectStatus::Completed,
    },
    SeedProject {
        title: "OSA Heritage Homes",
        category: "Web Development",
        description: "A responsive website for a Texas-based senior care facility, giving families \
            and residents clear information about assisted living, memory care, and related \
            services, with interactive sections for services and testimonials.",
        image: "/images/osa.jpg",
        github: "https://github.com/samuelikhifa/osaheristage.git",
        live: "https://www.osaheritage.com/",
        technologies: STANDARD_STACK,
        status: ProjectStatus::Active,
    },
    SeedProject {
        title: "OBEL – Osayanyobo Brothers Enterprises Limited",
        category: "Web Development",
        description: "A corporate website for an industrial services company operating across \
            Nigeria and the United States, presenting mechanical construction, electrical \
            installation, pipeline, maintenance, and procurement services.",
        image: "/images/obel.jpg",
        github: "https://github.com/samuelikhifa/obel.git",
        live: "https://www.osayanyoboltd.com/",
        technologies: STANDARD_STACK,
        status: ProjectStatus::Active,
    },
    SeedProject {
        title: "GVANY Sales & Distribution Company Limited",
        category: "Web Development",
        description: "A Pan-African business website showcasing marketing, distribution, \
            logistics, real estate, and consultancy operations, built around clear information \
            architecture and strong corporate branding.",
        image: "/images/gvany.jpg",
        github: "https://github.com/samuelikhifa/gvany.git",
        live: "https://www.gvany.com/",
        technologies: STANDARD_STACK,
        status: ProjectStatus::Active,
    },
    SeedProject {
        title: "Dr. Christos Etoka – Personal Brand & Mind Engineering Platform",
        category: "Web Development",
        description: "A personal brand and program site for an educator and psychologist, \
            presenting mentoring programs, executive retreats, books, and consultation services \
            and guiding visitors toward bookings and enrollment.",
        image: "/images/chris.jpg",
        github: "https://github.com/samuelikhifa/christos.git",
        live: "https://drchristos.xmindengineering.org",
        technologies: STANDARD_STACK,
        status: ProjectStatus::Active,
    },
    SeedProject {
        title: "TPN School – Learning & Employment Platform",
        category: "Web Development",
        description: "An ed-tech platform connecting skills training with employment, featuring \
            structured courses, instructor onboarding, and employer access to job-ready talent.",
        image: "/images/tpn.jpg",
        github: "https://github.com/samuelikhifa/tpn.git",
        live: "https://tpnschool.com/home",
        technologies: STANDARD_STACK,
        status: ProjectStatus::Active,
    },
    SeedProject {
        title: "TOYP UNIBEN",
        category: "Web Development",
        description: "A dedicated website for The Outstanding Young Persons Award at the \
            University of Benin, replacing document-based nominations with a central place for \
            nominations, award information, and updates.",
        image: "/images/toyp.jpg",
        github: "https://github.com/samuelikhifa/JCIN-UNIBEN-TOYP25.git",
        live: "https://toyp.jcinuniben.com/",
        technologies: &["HTML", "CSS", "JavaScript", "Figma"],
        status: ProjectStatus::Completed,
    },
    SeedProject {
        title: "JCIN UNIBEN",
        category: "Web Development",
        description: "The first website for JCIN UNIBEN, giving the organization a professional \
            presence beyond social media with Home, About, Registration, and Contact pages and \
            groundwork for SEO and traffic tracking.",
        image: "/images/jc.jpg",
        github: "https://github.com/samuelikhifa/jcinnuniben.git",
        live: "https://www.jcinuniben.com/",
        technologies: STANDARD_STACK,
        status: ProjectStatus::Active,
    },
    SeedProject {
        title: "My portfolio",
        category: "Web Development",
        description: "This portfolio: a showcase of frontend, SEO, and UI/UX work built for fast, \
            responsive performance, clear project highlights, and discoverability.",
        image: "/images/zul.jpg",
        github: "https://github.com/samuelikhifa/sikhifa.git",
        live: "https://sikhifa.vercel.app/",
        technologies: &["Next", "TypeScript", "Tailwind CSS", "Figma", "Google Analytics", "SEO"],
        status: ProjectStatus::Completed,
    },
];

/// The portfolio entries a fresh install starts with, ids `1..=n`.
pub fn default_projects() -> Vec<Project> {
    SEED.iter()
        .zip(1..)
        .map(|(seed, id)| Project {
            id,
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            description: seed.description.to_string(),
            image_url: seed.image.to_string(),
            github_url: Some(seed.github.to_string()),
            live_url: Some(seed.live.to_string()),
            technologies: seed.technologies.iter().map(|t| t.to_string()).collect(),
            status: seed.status,
            created_at: None,
            updated_at: None,
        })
        .collect()
}
