//! Built-in string tables.

/// Locale used when the active one lacks a key (or nothing was detected).
pub const DEFAULT_LOCALE: &str = "en";

pub const EN_CATALOG: &str = r#"
# English (default locale)
app.welcome = Welcome to Jargon
app.tagline = The living slang dictionary

search.title = Search
search.placeholder = "What does it mean?"
search.empty = No terms found

term.meaning = Meaning
term.examples = Examples
term.tags = Tags
term.similar = Similar terms
term.votes = Votes
term.origin = Origin
term.part_of_speech = Part of speech

submit.title = Submit a term
submit.success = Term submitted

list.trending = Trending
list.popular = Popular
list.all = All terms

error.network = Could not reach the server
error.server = The server reported an error
error.required = Term and meaning are required

health.ok = Service is up
health.down = Service is unavailable

common.loading = Loading...
common.retry = Retry
"#;

pub const ES_CATALOG: &str = r#"
# Spanish
app.welcome = Bienvenido a Jargon
app.tagline = El diccionario vivo de jerga

search.title = Buscar
search.placeholder = "¿Qué significa?"
search.empty = No se encontraron términos

term.meaning = Significado
term.examples = Ejemplos
term.tags = Etiquetas
term.similar = Términos similares
term.votes = Votos
term.origin = Origen
term.part_of_speech = Categoría gramatical

submit.title = Enviar un término
submit.success = Término enviado

list.trending = Tendencias
list.popular = Populares
list.all = Todos los términos

error.network = No se pudo conectar con el servidor
error.server = El servidor informó un error
error.required = El término y el significado son obligatorios

health.ok = El servicio está activo
health.down = El servicio no está disponible

common.loading = Cargando...
common.retry = Reintentar
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::keys;

    fn assert_complete(locale: &str, src: &str) {
        let cat = Catalog::parse(src).unwrap();
        for key in keys::ALL {
            assert!(
                cat.get(key).is_some(),
                "locale `{locale}` is missing key `{key}`"
            );
        }
        assert_eq!(cat.len(), keys::ALL.len(), "locale `{locale}` has stray keys");
    }

    #[test]
    fn builtin_catalogs_define_every_key() {
        assert_complete("en", EN_CATALOG);
        assert_complete("es", ES_CATALOG);
    }
}
