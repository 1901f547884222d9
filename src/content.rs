//! The words and lists that fill the page.
//!
//! Everything here is plain data. The built-in portfolio is used unless a JSON file with the same
//! shape is supplied, in which case that file replaces it wholesale.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// All text rendered on the page.
pub struct Content {
    /// Brand shown at the left of the navigation bar.
    pub brand: String,
    /// Banner copy.
    pub hero: Hero,
    /// About section copy.
    pub about: About,
    /// Projects section heading and cards.
    pub projects: Projects,
    /// Skills section heading and groups.
    pub skills: Skills,
    /// Contact section copy and links.
    pub contact: Contact,
    /// Footer line.
    pub footer: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Banner copy.
pub struct Hero {
    /// First line of the headline.
    pub title: String,
    /// Second, highlighted line of the headline.
    pub highlight: String,
    /// One-line description under the headline.
    pub tagline: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// About section copy.
pub struct About {
    /// Section heading.
    pub heading: String,
    /// Body paragraph, wrapped to the terminal width.
    pub body: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Projects section heading and cards.
pub struct Projects {
    /// Section heading.
    pub heading: String,
    /// Line under the heading.
    pub subtitle: String,
    /// One card per project.
    pub items: Vec<Project>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// A single project card.
pub struct Project {
    /// Card title.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Technologies shown as badges.
    pub tech: Vec<String>,
    /// Glyph shown before the title.
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Target of the "View Project" link.
    #[serde(default = "default_link")]
    pub link: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Skills section heading and groups.
pub struct Skills {
    /// Section heading.
    pub heading: String,
    /// Line under the heading.
    pub subtitle: String,
    /// One card per category.
    pub groups: Vec<SkillGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Skills under one category.
pub struct SkillGroup {
    /// Card title.
    pub category: String,
    /// Skills shown as badges.
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Contact section copy and links.
pub struct Contact {
    /// Section heading.
    pub heading: String,
    /// Invitation paragraph.
    pub blurb: String,
    /// Buttons, in display order.
    pub links: Vec<ContactLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// A contact button.
pub struct ContactLink {
    /// Button text.
    pub label: String,
    /// Where the button points.
    pub url: String,
}

fn default_icon() -> String {
    "◆".to_string()
}

fn default_link() -> String {
    "#".to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl Content {
    /// Read a content file in the same shape as [`Content`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid content JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| Error::Content {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            brand: "Portfolio".to_string(),
            hero: Hero {
                title: "Computer Science".to_string(),
                highlight: "Student".to_string(),
                tagline: "Front-end Developer & Data Analysis Enthusiast".to_string(),
            },
            about: About {
                heading: "About Me".to_string(),
                body: "A highly motivated and detail-oriented Computer Science student with a \
                       strong foundation in front-end web development technologies and a growing \
                       interest in data analysis. Seeking opportunities to apply technical skills, \
                       contribute to innovative projects, and further develop expertise in a \
                       challenging and dynamic environment. Possesses proven ability to quickly \
                       learn and master new technologies, collaborate effectively in team \
                       settings, and deliver high-quality results."
                    .to_string(),
            },
            projects: Projects {
                heading: "Featured Projects".to_string(),
                subtitle: "Here are some of my recent projects showcasing my skills in web \
                           development"
                    .to_string(),
                items: vec![
                    Project {
                        title: "Product Landing Page".to_string(),
                        description: "A modern, responsive landing page built with React.js \
                                      featuring smooth animations, interactive components, and \
                                      optimized performance."
                            .to_string(),
                        tech: strings(&["React.js", "Tailwind CSS", "Framer Motion"]),
                        icon: "◈".to_string(),
                        link: default_link(),
                    },
                    Project {
                        title: "Todo List App".to_string(),
                        description: "A feature-rich task management application with \
                                      drag-and-drop functionality, local storage, and intuitive \
                                      user interface."
                            .to_string(),
                        tech: strings(&["React.js", "JavaScript", "CSS3"]),
                        icon: "✓".to_string(),
                        link: default_link(),
                    },
                    Project {
                        title: "Messaging App".to_string(),
                        description: "Real-time messaging application with user authentication, \
                                      message history, and responsive design for seamless \
                                      communication."
                            .to_string(),
                        tech: strings(&["React.js", "Node.js", "Socket.io"]),
                        icon: "◎".to_string(),
                        link: default_link(),
                    },
                ],
            },
            skills: Skills {
                heading: "Skills & Technologies".to_string(),
                subtitle: "Technologies and tools I work with".to_string(),
                groups: vec![
                    SkillGroup {
                        category: "Frontend".to_string(),
                        items: strings(&[
                            "React.js",
                            "JavaScript",
                            "HTML5",
                            "CSS3",
                            "Tailwind CSS",
                            "Responsive Design",
                        ]),
                    },
                    SkillGroup {
                        category: "Backend".to_string(),
                        items: strings(&[
                            "Node.js",
                            "Express.js",
                            "RESTful APIs",
                            "Database Design",
                        ]),
                    },
                    SkillGroup {
                        category: "Tools & Technologies".to_string(),
                        items: strings(&["Git", "GitHub", "VS Code", "npm/yarn", "Webpack", "Vite"]),
                    },
                    SkillGroup {
                        category: "Data Analysis".to_string(),
                        items: strings(&[
                            "Python",
                            "Pandas",
                            "Data Visualization",
                            "Statistical Analysis",
                        ]),
                    },
                ],
            },
            contact: Contact {
                heading: "Let's Connect".to_string(),
                blurb: "I'm always interested in new opportunities and collaborations. Feel free \
                        to reach out!"
                    .to_string(),
                links: vec![
                    ContactLink {
                        label: "Email Me".to_string(),
                        url: "mailto:".to_string(),
                    },
                    ContactLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/".to_string(),
                    },
                    ContactLink {
                        label: "LinkedIn".to_string(),
                        url: "https://www.linkedin.com/".to_string(),
                    },
                ],
            },
            footer: "© 2025 Computer Science Student Portfolio. Built with Rust and ratatui."
                .to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
