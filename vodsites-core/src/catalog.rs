// Builtin Site Catalog
//
// The provider sites shipped with the repository. Kept as a plain data
// table; the bundle invariants (unique ids, non-empty fields) hold by
// construction and are re-checked in tests.

use indexmap::IndexMap;

use crate::bundle::SiteBundle;
use crate::registry::SiteRegistry;
use crate::site::SiteEntry;

/// Namespace of the builtin catalog bundle
pub const CUSTOMER_NAMESPACE: &str = "customer";

const CUSTOMER_SITES: &[(&str, &str, &str)] = &[
    (
        "qiqi",
        "https://www.qiqidys.com/api.php/provide/vod",
        "七七资源",
    ),
    (
        "nm_hema",
        "http://nm.4688888.xyz/vod/hema/hm.php/provide/vod/",
        "河马丨短剧(JX)",
    ),
    (
        "nm_kuwo_music",
        "http://nm.4688888.xyz/vod/kuwo/kuwo.php/provide/vod/",
        "酷我丨音乐(JX)",
    ),
    (
        "nm_kuwo_audio",
        "http://nm.4688888.xyz/vod/kuwo/kuwot.php/provide/vod/",
        "酷我丨听书(JX)",
    ),
    (
        "nm_kuwo_audio_dm",
        "http://nm.4688888.xyz/vod/kuwo/kuwotdm.php/provide/vod/",
        "酷我丨听书(JX) DM",
    ),
    (
        "nm_kuwo_music_dm",
        "http://nm.4688888.xyz/vod/kuwo/kwdm.php/provide/vod/",
        "酷我丨音乐(JX) DM",
    ),
    (
        "nm_qqmusic",
        "http://nm.4688888.xyz/vod/qqmusic.php/provide/vod/",
        "秋秋丨音乐(JX)",
    ),
    (
        "nm_qqmusic_dm",
        "http://nm.4688888.xyz/vod/qqmusicdm.php/provide/vod/",
        "秋秋丨音乐(JX) DM",
    ),
    (
        "nm_xmly",
        "http://nm.4688888.xyz/vod/xmly_a.php/provide/vod/",
        "喜马拉雅丨听书(JX)",
    ),
    (
        "nm_mobile_4k",
        "https://nm.4688888.xyz/vod/138.php/provide/vod/",
        "移动丨4K(JX)",
    ),
    (
        "nm_acfun_4k",
        "https://nm.4688888.xyz/vod/acfun.php/provide/vod/",
        "A站丨4K(JX)",
    ),
    (
        "nm_mobile_4k_alt",
        "https://nm.4688888.xyz/vod/bix.php/provide/vod/",
        "移动②丨4K(JX)",
    ),
    (
        "nm_gz_replace",
        "https://nm.4688888.xyz/vod/gzys.php/provide/vod",
        "泸泸丨替换(JX)",
    ),
    (
        "nm_jc_1k",
        "https://nm.4688888.xyz/vod/jc.php/provide/vod/",
        "京城丨1K",
    ),
    (
        "nm_leshi_1k",
        "https://nm.4688888.xyz/vod/ls.php/provide/vod/",
        "乐视丨1K(JX)",
    ),
    (
        "nm_migu_music",
        "https://nm.4688888.xyz/vod/migu.php/provide/vod",
        "咪咕丨音乐(JX)",
    ),
    (
        "nm_rr_4k",
        "https://nm.4688888.xyz/vod/rr.php/provide/vod/",
        "人人丨4K(JX)",
    ),
    (
        "nm_wyy_music",
        "https://nm.4688888.xyz/vod/wyy.php/provide/vod",
        "网易云丨音乐(JX)",
    ),
];

/// The builtin catalog as a bundle
#[must_use]
pub fn customer_sites() -> SiteBundle {
    let mut sites = IndexMap::with_capacity(CUSTOMER_SITES.len());
    for (id, api, name) in CUSTOMER_SITES {
        sites.insert((*id).to_string(), SiteEntry::new(*api, *name));
    }
    SiteBundle {
        namespace: CUSTOMER_NAMESPACE.to_string(),
        sites,
    }
}

/// A registry pre-loaded with the builtin catalog
#[must_use]
pub fn builtin_registry() -> SiteRegistry {
    let mut registry = SiteRegistry::new();
    registry.extend(&customer_sites());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_complete() {
        let bundle = customer_sites();
        assert_eq!(bundle.len(), 18);
        bundle.validate().unwrap();
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = CUSTOMER_SITES.iter().map(|(id, _, _)| *id).collect();
        assert_eq!(ids.len(), CUSTOMER_SITES.len());
    }

    #[test]
    fn test_qiqi_entry() {
        let bundle = customer_sites();
        let qiqi = &bundle.sites["qiqi"];
        assert_eq!(qiqi.api, "https://www.qiqidys.com/api.php/provide/vod");
        assert_eq!(qiqi.name, "七七资源");
    }

    #[test]
    fn test_builtin_registry_contains_catalog() {
        let registry = builtin_registry();
        let bundle = customer_sites();

        assert_eq!(registry.len(), bundle.len());
        for (id, entry) in &bundle.sites {
            assert_eq!(registry.get(id), Some(entry));
            assert_eq!(registry.record(id).unwrap().namespace, CUSTOMER_NAMESPACE);
        }
    }
}
