//! `ml.*` APIs.

use crate::endpoint::MethodRule::Always;
use crate::endpoint::Segment::{Literal, Param};
use crate::endpoint::{BodyKind, Endpoint, PathParam, PathShape};
use crate::http::HttpMethod::{Delete, Get};

pub static DELETE_TRAINED_MODEL: Endpoint = Endpoint {
    name: "ml.delete_trained_model",
    description: "Deletes an existing trained inference model that is currently not referenced by an ingest pipeline.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/current/delete-inference.html",
    path_params: &[PathParam::aliased("model_id", "modelId")],
    required: &["model_id"],
    url_components: &[],
    accepted_query: &[],
    aliases: &[],
    body: BodyKind::None,
    shapes: &[PathShape {
        when: &[],
        segments: &[Literal("_ml"), Literal("inference"), Param("model_id")],
        method: Always(Delete),
    }],
};

pub static GET_TRAINED_MODELS: Endpoint = Endpoint {
    name: "ml.get_trained_models",
    description: "Retrieves configuration information for a trained inference model.",
    documentation: "https://www.elastic.co/guide/en/elasticsearch/reference/current/get-inference.html",
    path_params: &[PathParam::aliased("model_id", "modelId")],
    required: &[],
    url_components: &[],
    accepted_query: &[
        "allow_no_match",
        "include_model_definition",
        "decompress_definition",
        "from",
        "size",
        "tags",
        "for_export",
    ],
    aliases: &[
        ("allowNoMatch", "allow_no_match"),
        ("includeModelDefinition", "include_model_definition"),
        ("decompressDefinition", "decompress_definition"),
        ("forExport", "for_export"),
    ],
    body: BodyKind::None,
    shapes: &[
        PathShape {
            when: &["model_id"],
            segments: &[Literal("_ml"), Literal("inference"), Param("model_id")],
            method: Always(Get),
        },
        PathShape {
            when: &[],
            segments: &[Literal("_ml"), Literal("inference")],
            method: Always(Get),
        },
    ],
};
