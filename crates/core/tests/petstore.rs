//! End-to-end generation against a petstore-style document.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use swagts_core::{Document, GenerateError, generate_for_tag};

const PETSTORE_JSON: &str = r##"{
  "tags": [{ "name": "pet" }, { "name": "store" }],
  "paths": {
    "/pet": {
      "put": {
        "tags": ["pet"],
        "summary": "Update an existing pet",
        "description": "Update an existing pet by Id",
        "requestBody": {
          "description": "Update an existent pet in the store",
          "required": true,
          "content": {
            "application/json": {
              "schema": { "$ref": "#/components/schemas/Pet" }
            }
          }
        },
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": { "$ref": "#/components/schemas/Pet" }
              }
            }
          }
        }
      }
    },
    "/pet/findByStatus": {
      "get": {
        "tags": ["pet"],
        "summary": "Finds Pets by status",
        "parameters": [
          {
            "name": "status",
            "in": "query",
            "required": false,
            "description": "Status values that need to be considered for filter",
            "schema": {
              "type": "string",
              "enum": ["available", "pending", "sold"]
            }
          }
        ],
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": {
                  "type": "array",
                  "items": { "$ref": "#/components/schemas/Pet" }
                }
              }
            }
          }
        }
      }
    },
    "/pet/{petId}": {
      "get": {
        "tags": ["pet"],
        "summary": "Find pet by ID",
        "description": "Returns a single pet",
        "parameters": [
          {
            "name": "petId",
            "in": "path",
            "required": true,
            "description": "ID of pet to return",
            "schema": { "type": "integer" }
          }
        ],
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": { "$ref": "#/components/schemas/Pet" }
              }
            }
          }
        }
      }
    },
    "/pet/{petId}/uploadImage": {
      "post": {
        "tags": ["pet"],
        "summary": "uploads an image",
        "parameters": [
          {
            "name": "petId",
            "in": "path",
            "required": true,
            "schema": { "type": "integer" }
          },
          {
            "name": "additionalMetadata",
            "in": "query",
            "required": false,
            "description": "Additional Metadata",
            "schema": { "type": "string" }
          }
        ],
        "requestBody": {
          "content": {
            "application/octet-stream": {
              "schema": { "type": "string", "format": "binary" }
            }
          }
        },
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": { "$ref": "#/components/schemas/ApiResponse" }
              }
            }
          }
        }
      }
    },
    "/pet/ping": {
      "get": {
        "tags": ["pet"],
        "responses": {
          "400": { "description": "nothing usable" }
        }
      }
    }
  },
  "components": {
    "schemas": {
      "Category": {
        "type": "object",
        "properties": {
          "id": { "type": "integer" },
          "name": { "type": "string" }
        }
      },
      "Tag": {
        "type": "object",
        "properties": {
          "id": { "type": "integer" },
          "name": { "type": "string" }
        }
      },
      "Pet": {
        "type": "object",
        "required": ["name", "photoUrls"],
        "properties": {
          "id": { "type": "integer" },
          "name": { "type": "string" },
          "category": { "$ref": "#/components/schemas/Category" },
          "photoUrls": {
            "type": "array",
            "items": { "type": "string" }
          },
          "tags": {
            "type": "array",
            "items": { "$ref": "#/components/schemas/Tag" }
          },
          "status": {
            "type": "string",
            "enum": ["available", "pending", "sold"]
          }
        }
      },
      "ApiResponse": {
        "type": "object",
        "properties": {
          "code": { "type": "integer" },
          "type": { "type": "string" },
          "message": { "type": "string" }
        }
      }
    }
  }
}"##;

#[test]
fn test_get_by_path_parameter() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let types = artifacts.types_document();
    let requests = artifacts.requests_document();

    assert!(types.contains(
        "export interface IGetPetByPetidPayload {\n  params: {\n    /**\n     * @description ID of pet to return\n     */\n    petId: number\n  }\n}"
    ));
    assert!(types.contains("export type IGetPetByPetidResponse = IPet"));
    assert!(requests.contains(
        "export const GetPetByPetid = (\n  payload: IGetPetByPetidPayload,\n  config: AxiosRequestConfig = {},\n) => {\n  return axios.get<IGetPetByPetidResponse>(`/pet/${payload.params.petId}`, {\n    ...config,\n  })\n}"
    ));
}

#[test]
fn test_binary_upload_with_optional_query() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let types = artifacts.types_document();
    let requests = artifacts.requests_document();

    assert!(types.contains("export interface IPostPetByPetidUploadImagePayload {"));
    assert!(types.contains("params: {\n    petId: number\n  }"));
    assert!(types.contains("querys?: {"));
    assert!(types.contains("additionalMetadata?: string"));
    assert!(types.contains("data: FormData"));

    assert!(requests.contains(
        "return axios.post<IPostPetByPetidUploadImageResponse>(`/pet/${payload.params.petId}/uploadImage`, payload.data, {\n    params: payload.querys,\n    ...config,\n  })"
    ));
}

#[test]
fn test_operation_without_payload_or_response() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let types = artifacts.types_document();
    let requests = artifacts.requests_document();

    assert!(!types.contains("IGetPetPingPayload"));
    assert!(requests.contains(
        "export const GetPetPing = (config: AxiosRequestConfig = {}) => {\n  return axios.get<void>('/pet/ping', {\n    ...config,\n  })\n}"
    ));
}

#[test]
fn test_referenced_definitions_declared_once_in_dependency_order() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let types = artifacts.types_document();

    // Pet is referenced by three operations but declared exactly once.
    assert_eq!(types.matches("interface IPet {").count(), 1);
    assert_eq!(types.matches("interface ICategory {").count(), 1);
    assert_eq!(types.matches("interface ITag {").count(), 1);
    assert_eq!(types.matches("interface IApiResponse {").count(), 1);

    // Dependencies precede their referents.
    let category = types.find("interface ICategory {").unwrap();
    let tag = types.find("interface ITag {").unwrap();
    let pet = types.find("interface IPet {").unwrap();
    let first_use = types.find("= IPet").unwrap();
    assert!(category < pet);
    assert!(tag < pet);
    assert!(pet < first_use);
}

#[test]
fn test_enum_union_preserves_declared_order() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let types = artifacts.types_document();

    assert!(types.contains("status?: 'available' | 'pending' | 'sold'"));
    assert!(types.contains("status?: 'available' | 'pending' | 'sold'\n  }\n}"));
}

#[test]
fn test_array_wrapping_field_optional_item_required() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let types = artifacts.types_document();

    assert!(types.contains("photoUrls: (string)[]"));
    assert!(types.contains("tags?: (ITag)[]"));
    assert!(types.contains("export type IGetPetFindByStatusResponse = (IPet)[]"));
}

#[test]
fn test_requests_document_imports_exported_names() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "pet").unwrap();
    let requests = artifacts.requests_document();

    assert!(requests.starts_with(
        "import axios from 'axios'\nimport type { AxiosRequestConfig } from 'axios'\nimport type {\n"
    ));
    assert!(requests.contains("  IPutPetPayload,\n"));
    assert!(requests.contains("  IPostPetByPetidUploadImageResponse,\n"));
    assert!(requests.contains("} from './types.gen'"));
    // Internal declarations stay out of the import list.
    assert!(!requests.contains("  IPet,\n"));
}

#[test]
fn test_generation_is_idempotent() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let first = generate_for_tag(&document, "pet").unwrap();
    let second = generate_for_tag(&document, "pet").unwrap();

    assert_eq!(first.types_document(), second.types_document());
    assert_eq!(first.requests_document(), second.requests_document());

    let reparsed = Document::from_json(PETSTORE_JSON).unwrap();
    let third = generate_for_tag(&reparsed, "pet").unwrap();
    assert_eq!(first.types_document(), third.types_document());
}

#[test]
fn test_tag_without_operations_yields_empty_artifacts() {
    let document = Document::from_json(PETSTORE_JSON).unwrap();
    let artifacts = generate_for_tag(&document, "store").unwrap();

    assert!(artifacts.declarations.is_empty());
    assert!(artifacts.functions.is_empty());
    assert_eq!(artifacts.types_document(), "");
}

#[test]
fn test_broken_reference_aborts_tag() {
    let json = r##"{
      "tags": [{ "name": "pet" }],
      "paths": {
        "/pet": {
          "get": {
            "tags": ["pet"],
            "responses": {
              "200": {
                "content": {
                  "application/json": {
                    "schema": { "$ref": "#/components/schemas/Ghost" }
                  }
                }
              }
            }
          }
        }
      }
    }"##;
    let document = Document::from_json(json).unwrap();
    let err = generate_for_tag(&document, "pet").unwrap_err();
    assert!(matches!(err, GenerateError::BrokenReference { .. }));
}

#[test]
fn test_colliding_operation_stems_abort_tag() {
    let json = r##"{
      "tags": [{ "name": "pet" }],
      "paths": {
        "/pet/{id}": {
          "get": { "tags": ["pet"], "responses": {} }
        },
        "/pet/{ID}": {
          "get": { "tags": ["pet"], "responses": {} }
        }
      }
    }"##;
    let document = Document::from_json(json).unwrap();
    let err = generate_for_tag(&document, "pet").unwrap_err();
    assert!(matches!(err, GenerateError::DuplicateOperationStem { .. }));
}
