// src/common/i18n.rs

use std::{collections::HashMap, sync::Arc};

use crate::middleware::i18n::Locale;

pub const DEFAULT_LANG: &str = "en";

// Catálogos embutidos no binário: (idioma, json)
const CATALOGS: [(&str, &str); 2] = [
    ("en", include_str!("../../locales/en.json")),
    ("pt", include_str!("../../locales/pt.json")),
];

type Catalog = HashMap<String, String>;

// Textos da interface por idioma.
// Ordem de busca: idioma pedido -> inglês -> a própria chave.
#[derive(Clone, Debug)]
pub struct I18nStore {
    catalogs: Arc<HashMap<String, Catalog>>,
}

impl I18nStore {
    pub fn load() -> anyhow::Result<Self> {
        let mut catalogs = HashMap::new();
        for (lang, raw) in CATALOGS {
            let catalog: Catalog = serde_json::from_str(raw)
                .map_err(|e| anyhow::anyhow!("Catálogo '{}' inválido: {}", lang, e))?;
            catalogs.insert(lang.to_string(), catalog);
        }
        tracing::debug!("Catálogos de idioma carregados: {}", catalogs.len());

        Ok(Self { catalogs: Arc::new(catalogs) })
    }

    pub fn get<'a>(&'a self, locale: &Locale, key: &'a str) -> &'a str {
        self.lookup(&locale.0, key)
            .or_else(|| self.lookup(DEFAULT_LANG, key))
            .unwrap_or(key)
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.catalogs
            .get(lang)
            .and_then(|catalog| catalog.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_the_same_keys() {
        let store = I18nStore::load().unwrap();
        let en = &store.catalogs["en"];
        let pt = &store.catalogs["pt"];
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut pt_keys: Vec<_> = pt.keys().collect();
        en_keys.sort();
        pt_keys.sort();
        assert_eq!(en_keys, pt_keys);
    }

    #[test]
    fn translates_and_falls_back() {
        let store = I18nStore::load().unwrap();
        let pt = Locale("pt".to_string());
        let fr = Locale("fr".to_string());

        assert_eq!(store.get(&pt, "alerts.empty"), "Nenhum alerta no sistema");
        // Idioma sem catálogo cai no inglês
        assert_eq!(store.get(&fr, "alerts.empty"), "No alerts in the system");
        // Chave desconhecida volta como está
        assert_eq!(store.get(&pt, "nao.existe"), "nao.existe");
    }
}
