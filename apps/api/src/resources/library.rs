//! Company resource library — per-company PDF documents in object storage.
//!
//! Keys are `companies/{company-slug}/{file_name}`.

use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::resources::store::ResourceStore;
use crate::resources::ResourceError;

const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject {
    pub company: String,
    pub file_name: String,
    pub key: String,
    pub size_bytes: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceLink {
    pub file_name: String,
    pub url: String,
    pub expires_in_secs: u64,
}

/// Normalizes a company name to a slug: `"Goldman Sachs & Co."` → `"goldman-sachs-co"`.
pub fn company_slug(name: &str) -> Result<String, ResourceError> {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        return Err(ResourceError::InvalidCompany(name.to_string()));
    }
    Ok(slug)
}

/// Keeps the final path component, replaces unsafe characters with `_`
/// and requires a `.pdf` extension.
pub fn sanitize_file_name(name: &str) -> Result<String, ResourceError> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let stem_len = cleaned.len().saturating_sub(4);
    let has_pdf_ext = cleaned.len() > 4 && cleaned[stem_len..].eq_ignore_ascii_case(".pdf");
    if !has_pdf_ext || cleaned.trim_matches(['.', '_']).len() <= 4 {
        return Err(ResourceError::InvalidFileName(name.to_string()));
    }
    Ok(cleaned)
}

pub fn ensure_pdf(body: &[u8], max_bytes: usize) -> Result<(), ResourceError> {
    if body.len() > max_bytes {
        return Err(ResourceError::TooLarge { max: max_bytes });
    }
    if !body.starts_with(PDF_MAGIC) {
        return Err(ResourceError::NotPdf);
    }
    Ok(())
}

pub fn company_prefix(slug: &str) -> String {
    format!("companies/{slug}/")
}

pub async fn list_resources(
    store: &dyn ResourceStore,
    company: &str,
) -> Result<Vec<ResourceObject>, ResourceError> {
    let slug = company_slug(company)?;
    let prefix = company_prefix(&slug);

    let mut resources: Vec<ResourceObject> = store
        .list(&prefix)
        .await?
        .into_iter()
        .filter_map(|object| {
            let file_name = object.key.strip_prefix(&prefix)?.to_string();
            if file_name.is_empty() || file_name.contains('/') {
                return None;
            }
            Some(ResourceObject {
                company: slug.clone(),
                file_name,
                key: object.key,
                size_bytes: object.size_bytes,
                last_modified: object.last_modified,
            })
        })
        .collect();
    resources.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(resources)
}

pub async fn upload_resource(
    store: &dyn ResourceStore,
    company: &str,
    file_name: &str,
    body: Bytes,
    max_bytes: usize,
) -> Result<ResourceObject, ResourceError> {
    let slug = company_slug(company)?;
    let file_name = sanitize_file_name(file_name)?;
    ensure_pdf(&body, max_bytes)?;

    let key = format!("{}{}", company_prefix(&slug), file_name);
    let size_bytes = body.len() as u64;
    store.put(&key, body, PDF_CONTENT_TYPE).await?;

    Ok(ResourceObject {
        company: slug,
        file_name,
        key,
        size_bytes,
        last_modified: Some(Utc::now()),
    })
}

pub async fn download_link(
    store: &dyn ResourceStore,
    company: &str,
    file_name: &str,
    ttl: Duration,
) -> Result<ResourceLink, ResourceError> {
    let slug = company_slug(company)?;
    let file_name = sanitize_file_name(file_name)?;
    let key = format!("{}{}", company_prefix(&slug), file_name);

    if !store.exists(&key).await? {
        return Err(ResourceError::NotFound(key));
    }
    let url = store.presign_get(&key, ttl).await?;

    Ok(ResourceLink {
        file_name,
        url,
        expires_in_secs: ttl.as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::store::memory::InMemoryStore;

    fn pdf(body: &str) -> Bytes {
        Bytes::from(format!("%PDF-1.7\n{body}"))
    }

    #[test]
    fn test_company_slug() {
        assert_eq!(company_slug("Goldman Sachs & Co.").unwrap(), "goldman-sachs-co");
        assert_eq!(company_slug("  TCS ").unwrap(), "tcs");
        assert!(company_slug("!!!").is_err());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(
            sanitize_file_name("../../etc/Interview Guide.PDF").unwrap(),
            "Interview_Guide.PDF"
        );
        assert_eq!(
            sanitize_file_name("C:\\docs\\aptitude.pdf").unwrap(),
            "aptitude.pdf"
        );
        assert!(sanitize_file_name("notes.txt").is_err());
        assert!(sanitize_file_name(".pdf").is_err());
        assert!(sanitize_file_name("dir/").is_err());
    }

    #[test]
    fn test_ensure_pdf() {
        assert!(ensure_pdf(b"%PDF-1.4 ...", 100).is_ok());
        assert!(matches!(ensure_pdf(b"GIF89a", 100), Err(ResourceError::NotPdf)));
        assert!(matches!(
            ensure_pdf(b"%PDF-1.4 long body", 5),
            Err(ResourceError::TooLarge { max: 5 })
        ));
    }

    #[tokio::test]
    async fn test_upload_then_list_sorted() {
        let store = InMemoryStore::default();
        upload_resource(&store, "Acme Corp", "zeta.pdf", pdf("z"), 1024)
            .await
            .unwrap();
        let uploaded = upload_resource(&store, "acme corp", "alpha.pdf", pdf("a"), 1024)
            .await
            .unwrap();
        assert_eq!(uploaded.key, "companies/acme-corp/alpha.pdf");

        upload_resource(&store, "Other", "alpha.pdf", pdf("o"), 1024)
            .await
            .unwrap();

        let listed = list_resources(&store, "ACME-Corp").await.unwrap();
        let names: Vec<_> = listed.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["alpha.pdf", "zeta.pdf"]);
        assert!(listed.iter().all(|r| r.company == "acme-corp"));
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let store = InMemoryStore::default();
        let err = upload_resource(&store, "Acme", "fake.pdf", Bytes::from_static(b"hello"), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotPdf));
        assert!(list_resources(&store, "Acme").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_download_link_requires_existing_object() {
        let store = InMemoryStore::default();
        let missing = download_link(&store, "Acme", "guide.pdf", Duration::from_secs(60)).await;
        assert!(matches!(missing, Err(ResourceError::NotFound(_))));

        upload_resource(&store, "Acme", "guide.pdf", pdf("g"), 1024)
            .await
            .unwrap();
        let link = download_link(&store, "Acme", "guide.pdf", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(link.expires_in_secs, 60);
        assert!(link.url.contains("companies/acme/guide.pdf"));
    }
}
