//! Project catalog and the category index that drives the gallery filter.
//!
//! The index is a static lookup from project id to its tag set. Visibility is
//! decided by [`is_visible`], a pure predicate over one index entry and the
//! active [`Category`]; nothing here holds mutable state.

use std::collections::HashMap;

use serde::Serialize;

use crate::gallery::category::Category;

/// A featured project card.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    /// Badge shown over the project image.
    pub badge: &'static str,
    pub summary: &'static str,
    pub key_features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    /// Category tags; unordered, may be empty.
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub image: &'static str,
}

const WEB_BASICS: &[&str] = &["HTML5", "CSS3", "jQuery", "JavaScript", "E-commerce"];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "integria",
        title: "Integria Healthcare E-commerce Platform",
        client: "Integria Healthcare",
        badge: "E-commerce",
        summary: "Developed a comprehensive e-commerce platform for Integria Healthcare, a leading natural healthcare company in Australia. Built a responsive, user-friendly online store with product catalog, shopping cart, and secure checkout functionality.",
        key_features: &[
            "Full-featured e-commerce platform with product management",
            "Responsive design optimized for all devices",
            "Advanced product filtering and search functionality",
            "Secure payment integration and checkout process",
        ],
        tech_stack: WEB_BASICS,
        tags: &["E-commerce"],
        live_url: "https://www.integria.com/en-au",
        image: "/static/project/integria-web-logo.png",
    },
    Project {
        id: "isuzu",
        title: "Isuzu UTE Australia Website",
        client: "Isuzu UTE Australia",
        badge: "React Js",
        summary: "Developed a comprehensive corporate website for Isuzu UTE Australia featuring their D-MAX ute and MU-X SUV vehicle lines. Built with modern front-end technologies and Sitecore CMS for content management and scalability.",
        key_features: &[
            "Interactive vehicle configurator and build & quote tools",
            "Dealer locator and test drive booking system",
            "Responsive design optimized for all devices",
            "Dynamic content management with Sitecore CMS",
        ],
        tech_stack: &["React.js", "SCSS", "Sitecore", "JavaScript"],
        tags: &["React/Next.js"],
        live_url: "https://www.isuzuute.com.au/",
        image: "/static/project/isuzu-australia.png",
    },
    Project {
        id: "cityhire",
        title: "CityHire Equipment Rental Platform",
        client: "CityHire UK",
        badge: "CMS Development",
        summary: "Developed and enhanced the CityHire equipment rental platform built on Umbraco CMS. Improved functionality, user experience, and implemented modern UI/UX design for one of UK's leading equipment hire services.",
        key_features: &[
            "Equipment catalog with advanced search and filtering",
            "Responsive design optimized for mobile and desktop",
            "Dynamic content management with Umbraco CMS",
            "Enhanced user interface with modern styling",
        ],
        tech_stack: &["Umbraco", "JavaScript", "Tailwind CSS", "HTML5"],
        tags: &["CMS"],
        live_url: "https://www.cityhire.co.uk/",
        image: "/static/project/city-hire-logo.png",
    },
    Project {
        id: "waverley",
        title: "Waverley Mills E-commerce Store",
        client: "Waverley Mills Australia",
        badge: "Word Press",
        summary: "Developed a premium e-commerce platform for Waverley Mills, Australia's heritage wool mill. Built with WordPress and custom theming for a luxurious shopping experience featuring wool blankets, throws, and home accessories.",
        key_features: &[
            "Full e-commerce functionality with secure checkout",
            "Custom WordPress theme with elegant design",
            "Product catalog with advanced filtering by material and category",
            "Responsive design optimized for mobile shopping",
        ],
        tech_stack: &["WordPress", "WooCommerce", "Custom Theming", "PHP", "JavaScript"],
        tags: &["WordPress", "E-commerce"],
        live_url: "https://waverleymills.com/",
        image: "/static/project/waverley-mills.png",
    },
    Project {
        id: "mustad",
        title: "Mustad B2B Dealer Webshop",
        client: "Mustad EMEA",
        badge: "B2B E-commerce",
        summary: "Developed a comprehensive B2B dealer e-commerce platform for Mustad EMEA Distribution. Built a secure, login-based webshop with multi-language support for authorized dealers across Europe, Middle East, and Africa regions.",
        key_features: &[
            "Secure B2B dealer authentication and access control",
            "Multi-language support (EN, DE, ES, FR, IT)",
            "Custom pricing and product catalog for dealers",
            "Responsive design for seamless ordering experience",
        ],
        tech_stack: WEB_BASICS,
        tags: &["B2B E-commerce", "E-commerce"],
        live_url: "https://dealershop.mustad.com/en-us/",
        image: "/static/project/mustad-logo.png",
    },
    Project {
        id: "larsonjuhl",
        title: "Larson Juhl E-commerce Platform",
        client: "Larson Juhl UK",
        badge: "B2B E-commerce",
        summary: "Developed a comprehensive e-commerce platform for Larson Juhl UK, a leading supplier of picture framing products and mouldings. Built a professional platform with extensive product catalog and seamless ordering experience for trade customers.",
        key_features: &[
            "Extensive product catalog with detailed specifications",
            "Advanced search and filtering for framing products",
            "Secure e-commerce with trade customer pricing",
            "Responsive design optimized for professional users",
        ],
        tech_stack: WEB_BASICS,
        tags: &["B2B E-commerce", "E-commerce"],
        live_url: "https://larsonjuhl.co.uk/",
        image: "/static/project/larsonjuhl-logo.png",
    },
    Project {
        id: "sfs",
        title: "SFS UK E-commerce Platform",
        client: "SFS Group UK",
        badge: "E-commerce",
        summary: "Developed a comprehensive e-commerce platform for SFS Group UK, a leading manufacturer of mechanical fastening systems and precision components. Built a professional B2B/B2C platform with advanced product catalog and ordering capabilities.",
        key_features: &[
            "Comprehensive product catalog with technical specifications",
            "Advanced search and filtering for industrial components",
            "Secure e-commerce functionality with order management",
            "Responsive design optimized for B2B users",
        ],
        tech_stack: WEB_BASICS,
        tags: &["E-commerce"],
        live_url: "https://uk.sfs.com/",
        image: "/static/project/sfs-logo.png",
    },
    Project {
        id: "powerhouse",
        title: "PowerHouse Group Corporate Website",
        client: "PowerHouse Group Australia",
        badge: "Corporate Website",
        summary: "Developed a professional corporate website for PowerHouse Group Australia, a leading provider of business solutions and services. Built a modern, responsive platform showcasing their services, expertise, and company values with engaging user experience.",
        key_features: &[
            "Modern corporate design with professional aesthetics",
            "Service showcase with detailed information architecture",
            "Responsive layout optimized for all devices",
            "Contact forms and lead generation functionality",
        ],
        tech_stack: &["HTML5", "CSS3", "JavaScript", "jQuery", "Responsive Design"],
        tags: &["Corporate"],
        live_url: "https://www.powerhousegroup.com.au/",
        image: "/static/project/powerhousegroup-logo.png",
    },
    Project {
        id: "fastline",
        title: "Fastline Carpet Cleaning Website",
        client: "Fastline Carpet Cleaning Melbourne",
        badge: "Word Press",
        summary: "Developed a comprehensive service website for Fastline Carpet Cleaning, a professional cleaning company serving Melbourne and surrounding areas. Built a user-friendly platform showcasing their cleaning services with online booking and quote functionality.",
        key_features: &[
            "Complete service catalog with detailed descriptions",
            "Online booking and quote request forms",
            "Responsive design for mobile and desktop users",
            "Service area locator and customer testimonials",
        ],
        tech_stack: &["WordPress", "PHP", "JavaScript", "CSS3", "Responsive Design"],
        tags: &["WordPress"],
        live_url: "https://www.fastlinecarpetcleaning.com.au/",
        image: "/static/project/fastlinecarpetcleaning-logo.png",
    },
];

/// The filter predicate.
///
/// `All` shows everything. Any other category shows the project only when its
/// tag set contains the category label; a missing entry is never shown.
pub fn is_visible(tags: Option<&[&str]>, category: Category) -> bool {
    if category.is_all() {
        return true;
    }
    tags.is_some_and(|tags| tags.contains(&category.label()))
}

/// Static project id → tag set lookup.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    tags: HashMap<&'static str, &'static [&'static str]>,
}

impl CategoryIndex {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static [&'static str])>,
    {
        Self {
            tags: entries.into_iter().collect(),
        }
    }

    pub fn from_projects(projects: &[Project]) -> Self {
        Self::from_entries(projects.iter().map(|p| (p.id, p.tags)))
    }

    pub fn tags(&self, id: &str) -> Option<&'static [&'static str]> {
        self.tags.get(id).copied()
    }

    pub fn is_visible(&self, id: &str, category: Category) -> bool {
        is_visible(self.tags(id), category)
    }
}

/// Projects in display order plus their category index.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: &'static [Project],
    index: CategoryIndex,
}

impl Catalog {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            index: CategoryIndex::from_projects(projects),
        }
    }

    /// The featured projects shipped with the site.
    pub fn builtin() -> Self {
        Self::new(PROJECTS)
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn get(&self, id: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects visible under `category`, in catalog order.
    pub fn visible(&self, category: Category) -> Vec<&'static Project> {
        self.projects
            .iter()
            .filter(|p| self.index.is_visible(p.id, category))
            .collect()
    }
}
