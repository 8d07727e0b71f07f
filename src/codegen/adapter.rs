//! Source Adapter Profiles
//!
//! Everything adapter-specific in the generated module lives in one table:
//! the identity field documentation, the raw payload type and the import that
//! brings the raw payload type into scope. Supporting a new adapter means
//! adding a profile here; the renderers only read profiles.

use super::config::SourcePluginType;

/// Adapter-specific rendering bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterProfile {
    /// Documentation for the `_id` field
    pub id_doc: &'static str,
    /// Type of the `_raw` field
    pub raw_type: &'static str,
    /// Import line exposing `raw_type`, if it needs one
    pub import: Option<&'static str>,
}

const LOCAL: AdapterProfile = AdapterProfile {
    id_doc: "File path relative to `contentDirPath`",
    raw_type: "Local.RawDocumentData",
    import: Some("import * as Local from 'contentlayer/source-files'"),
};

const CONTENTFUL: AdapterProfile = AdapterProfile {
    id_doc: "Contentful object id",
    raw_type: "Contentful.RawDocumentData",
    import: Some("import * as Contentful from '@contentlayer/source-contentful'"),
};

const SANITY: AdapterProfile = AdapterProfile {
    id_doc: "Sanity object id",
    raw_type: "Record<string, any>",
    import: None,
};

const UNKNOWN: AdapterProfile = AdapterProfile {
    id_doc: "ID",
    raw_type: "Record<string, any>",
    import: None,
};

impl SourcePluginType {
    /// Look up the rendering profile for this adapter
    pub fn profile(self) -> &'static AdapterProfile {
        match self {
            SourcePluginType::Local => &LOCAL,
            SourcePluginType::Contentful => &CONTENTFUL,
            SourcePluginType::Sanity => &SANITY,
            SourcePluginType::Unknown => &UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_profile() {
        let profile = SourcePluginType::Local.profile();
        assert_eq!(profile.raw_type, "Local.RawDocumentData");
        assert!(profile.import.unwrap().contains("as Local"));
    }

    #[test]
    fn test_contentful_profile() {
        let profile = SourcePluginType::Contentful.profile();
        assert_eq!(profile.raw_type, "Contentful.RawDocumentData");
        assert!(profile.import.unwrap().contains("as Contentful"));
    }

    #[test]
    fn test_open_map_adapters_have_no_import() {
        for plugin in [SourcePluginType::Sanity, SourcePluginType::Unknown] {
            let profile = plugin.profile();
            assert_eq!(profile.raw_type, "Record<string, any>");
            assert!(profile.import.is_none());
        }
        assert_eq!(SourcePluginType::Unknown.profile().id_doc, "ID");
    }
}
