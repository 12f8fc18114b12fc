// AUTO-GENERATED FILE - DO NOT EDIT
// Regenerate with `playground generate` instead of editing by hand.

use std::borrow::Cow;

use crate::registry::PackageCard;

/// Display entries for every discovered and curated package, pre-sorted by name.
pub static PACKAGES: &[PackageCard] = &[
    PackageCard {
        name: Cow::Borrowed("Express Sample"),
        description: Cow::Borrowed("Node.js web framework"),
        href: Cow::Borrowed("http://localhost:3001"),
        rel: Some(Cow::Borrowed("noopener noreferrer")),
    },
    PackageCard {
        name: Cow::Borrowed("Nest.js Sample"),
        description: Cow::Borrowed("TypeScript server-side framework"),
        href: Cow::Borrowed("http://localhost:3002"),
        rel: Some(Cow::Borrowed("noopener noreferrer")),
    },
    PackageCard {
        name: Cow::Borrowed("Next.js Sample"),
        description: Cow::Borrowed("Full-stack React framework"),
        href: Cow::Borrowed("next-sample/index.html"),
        rel: None,
    },
    PackageCard {
        name: Cow::Borrowed("Preact Sample"),
        description: Cow::Borrowed("Lightweight React alternative"),
        href: Cow::Borrowed("preact-sample/index.html"),
        rel: None,
    },
    PackageCard {
        name: Cow::Borrowed("React Sample"),
        description: Cow::Borrowed("React application built with Rsbuild"),
        href: Cow::Borrowed("react-sample/index.html"),
        rel: None,
    },
];
